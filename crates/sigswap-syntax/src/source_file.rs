//! A parsed file: name, text, tree, and parse diagnostics in one place.

use crate::arena::NodeArena;
use crate::ast::{Node, NodeIndex};
use crate::parser::{ParseDiagnostic, parse_source_file};
use crate::syntax_kind::SyntaxKind;

pub struct SourceFile {
    file_name: String,
    text: String,
    arena: NodeArena,
    root: NodeIndex,
    diagnostics: Vec<ParseDiagnostic>,
}

impl SourceFile {
    /// Parses `text` into a tree. Never fails; recovery problems land in
    /// [`SourceFile::diagnostics`].
    pub fn parse(file_name: impl Into<String>, text: impl Into<String>) -> SourceFile {
        let text = text.into();
        let result = parse_source_file(&text);
        SourceFile {
            file_name: file_name.into(),
            text,
            arena: result.arena,
            root: result.root,
            diagnostics: result.diagnostics,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    /// The node's source text.
    pub fn text_of(&self, idx: NodeIndex) -> &str {
        let (pos, end) = self.arena.span(idx);
        &self.text[pos as usize..end as usize]
    }

    /// The innermost identifier whose span contains `position`. The end
    /// bound is inclusive so a cursor sitting right after the last character
    /// still hits the identifier.
    pub fn identifier_at(&self, position: u32) -> Option<NodeIndex> {
        fn visit(arena: &NodeArena, idx: NodeIndex, position: u32) -> Option<NodeIndex> {
            let (pos, end) = arena.span(idx);
            if position < pos || position > end {
                return None;
            }
            let mut best = match arena.get(idx) {
                Node::Identifier(_) => Some(idx),
                _ => None,
            };
            for child in arena.get_children(idx) {
                if let Some(found) = visit(arena, child, position) {
                    best = Some(found);
                }
            }
            best
        }
        visit(&self.arena, self.root, position)
    }

    /// All identifier nodes spelled exactly `text`, in arena order.
    pub fn identifiers_named(&self, text: &str) -> Vec<NodeIndex> {
        self.arena
            .iter()
            .filter_map(|(idx, node)| match node {
                Node::Identifier(d) if d.text == text => Some(idx),
                _ => None,
            })
            .collect()
    }

    /// Convenience for tests and tools: the first node of `kind` in arena
    /// order, which for nested same-kind nodes is the innermost built first.
    pub fn first_node_of_kind(&self, kind: SyntaxKind) -> Option<NodeIndex> {
        self.arena.iter().find(|(_, node)| node.kind() == kind).map(|(idx, _)| idx)
    }
}
