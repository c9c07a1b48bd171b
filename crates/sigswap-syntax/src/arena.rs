//! Flat node storage with child enumeration.

use crate::ast::{Node, NodeIndex};
use crate::syntax_kind::SyntaxKind;

/// Owns every node of one parsed file.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

fn add_opt(out: &mut Vec<NodeIndex>, idx: Option<NodeIndex>) {
    if let Some(idx) = idx {
        out.push(idx);
    }
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn add(&mut self, node: Node) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        idx
    }

    pub fn get(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx.0 as usize]
    }

    pub fn get_mut(&mut self, idx: NodeIndex) -> &mut Node {
        &mut self.nodes[idx.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeIndex(i as u32), node))
    }

    pub fn kind(&self, idx: NodeIndex) -> SyntaxKind {
        self.get(idx).kind()
    }

    /// The node's `(pos, end)` byte bounds.
    pub fn span(&self, idx: NodeIndex) -> (u32, u32) {
        let base = self.get(idx).base();
        (base.pos, base.end)
    }

    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.get(idx).base().parent
    }

    /// The identifier's text, when `idx` is an identifier.
    pub fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        match self.get(idx) {
            Node::Identifier(d) => Some(&d.text),
            _ => None,
        }
    }

    /// Enumerates direct children in source order. This is the single place
    /// that knows each node's shape; every traversal goes through it.
    pub fn get_children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        match self.get(idx) {
            Node::SourceFile(d) => out.extend(&d.statements),
            Node::Identifier(_) | Node::NumericLiteral(_) | Node::StringLiteral(_) => {}
            Node::ImportDeclaration(d) => {
                out.extend(&d.bindings);
                add_opt(&mut out, d.module_specifier);
            }
            Node::FunctionDeclaration(d) | Node::FunctionExpression(d) | Node::ArrowFunction(d) => {
                add_opt(&mut out, d.name);
                out.extend(&d.parameters);
                add_opt(&mut out, d.type_annotation);
                add_opt(&mut out, d.body);
            }
            Node::Parameter(d) => {
                out.push(d.name);
                add_opt(&mut out, d.type_annotation);
                add_opt(&mut out, d.initializer);
            }
            Node::Block(d) => out.extend(&d.statements),
            Node::VariableStatement(d) => out.push(d.declaration_list),
            Node::VariableDeclarationList(d) => out.extend(&d.declarations),
            Node::VariableDeclaration(d) => {
                out.push(d.name);
                add_opt(&mut out, d.type_annotation);
                add_opt(&mut out, d.initializer);
            }
            Node::ExpressionStatement(d) => out.push(d.expression),
            Node::ReturnStatement(d) => add_opt(&mut out, d.expression),
            Node::CallExpression(d) => {
                out.push(d.expression);
                out.extend(&d.arguments);
            }
            Node::PropertyAccessExpression(d) => {
                out.push(d.expression);
                out.push(d.name);
            }
            Node::ObjectLiteralExpression(d) => out.extend(&d.properties),
            Node::ArrayLiteralExpression(d) => out.extend(&d.elements),
            Node::PropertyAssignment(d) => {
                out.push(d.name);
                out.push(d.initializer);
            }
            Node::ShorthandPropertyAssignment(d) => out.push(d.name),
            Node::SpreadElement(d) => out.push(d.expression),
            Node::ParenthesizedExpression(d) => out.push(d.expression),
            Node::BinaryExpression(d) => {
                out.push(d.left);
                out.push(d.right);
            }
            Node::PrefixUnaryExpression(d) => out.push(d.operand),
            Node::AsExpression(d) => {
                out.push(d.expression);
                out.push(d.type_node);
            }
            Node::TypeReference(d) => out.push(d.type_name),
            Node::ArrayType(d) => out.push(d.element_type),
            Node::TypeLiteral(d) => out.extend(&d.members),
            Node::PropertySignature(d) => {
                out.push(d.name);
                add_opt(&mut out, d.type_annotation);
            }
            Node::TypeQuery(d) => out.push(d.expr_name),
        }
        out
    }

    /// Assigns parent links to every node reachable from `root`.
    pub fn set_parents(&mut self, root: NodeIndex) {
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            for child in self.get_children(idx) {
                self.get_mut(child).base_mut().parent = Some(idx);
                stack.push(child);
            }
        }
    }
}
