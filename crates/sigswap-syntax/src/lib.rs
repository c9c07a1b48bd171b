//! Scanner, AST arena, and parser for the TypeScript subset the sigswap
//! engine analyzes.
//!
//! The tree exposes a small capability set: kind tests, tight spans, child
//! traversal, parent links, and text slices. The reference resolver and
//! edit synthesizer are built entirely on those.

pub mod arena;
pub mod ast;
pub mod parser;
pub mod scanner;
pub mod source_file;
pub mod syntax_kind;

pub use arena::NodeArena;
pub use ast::{ModifierFlags, Node, NodeBase, NodeIndex, NodeList};
pub use parser::{ParseDiagnostic, ParseResult, parse_source_file};
pub use scanner::{ScannerState, Token, tokenize};
pub use source_file::SourceFile;
pub use syntax_kind::SyntaxKind;

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod parser_tests;
