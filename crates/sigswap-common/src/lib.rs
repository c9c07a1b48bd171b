//! Common types and limits shared across the sigswap workspace.
//!
//! Holds the wire-level span type every other crate speaks, plus the
//! ceilings that bound the reference resolver.

pub mod limits;
pub mod span;

pub use span::TextSpan;
