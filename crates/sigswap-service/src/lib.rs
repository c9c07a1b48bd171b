//! Signature reordering engine.
//!
//! Given a position inside a function-like declaration, the service can
//! report the declaration's parameters or compute the text edits that
//! reorder or delete them, keeping every reachable call and alias
//! declaration consistent. Edits are reported, never applied: the host
//! owns the text and commits the changes itself.

pub mod call_sites;
pub mod declarations;
pub mod edits;
pub mod project;
pub mod protocol;
pub mod references;
pub mod requests;

pub use project::{LanguageService, Project};
pub use protocol::{FileTextChanges, ParameterInfo, ParameterUpdate, ReferenceEntry, TextChange};
pub use requests::{get_signature_parameters, sort_signature_parameters, swap_signature_parameters};
