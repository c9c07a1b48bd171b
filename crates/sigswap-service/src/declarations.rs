//! Finding the function-like declaration a position points at, and reading
//! its parameter list.

use sigswap_syntax::{NodeIndex, SourceFile};

use crate::protocol::ParameterInfo;

/// Innermost function-like declaration whose span contains `position`.
///
/// Bounds are inclusive on both ends so a cursor parked just after the
/// closing brace still selects the function.
pub fn find_signature_declaration(source: &SourceFile, position: u32) -> Option<NodeIndex> {
    let mut found = None;
    visit(source, source.root(), position, &mut found);
    found
}

fn visit(source: &SourceFile, node: NodeIndex, position: u32, found: &mut Option<NodeIndex>) {
    let (pos, end) = source.arena().span(node);
    if position < pos || position > end {
        return;
    }
    if source.arena().kind(node).is_function_like() {
        // Children are visited after, so deeper matches overwrite.
        *found = Some(node);
    }
    for child in source.arena().get_children(node) {
        visit(source, child, position, found);
    }
}

/// Parameter nodes of a function-like declaration, in source order.
pub fn signature_parameters(source: &SourceFile, decl: NodeIndex) -> Vec<NodeIndex> {
    match source.arena().get(decl).as_function_like() {
        Some(data) => data.parameters.clone(),
        None => Vec::new(),
    }
}

/// Name node of a function-like declaration, if it has one. Arrow
/// functions and function expressions are usually anonymous.
pub fn declaration_name(source: &SourceFile, decl: NodeIndex) -> Option<NodeIndex> {
    source.arena().get(decl).as_function_like()?.name
}

/// Position to run reference search from.
///
/// Named declarations anchor at their own name. Anonymous ones borrow the
/// name of the variable or property they are assigned to, which is how
/// callers reach them. With no name anywhere, the declaration start is
/// still a valid (if fruitless) anchor.
pub fn reference_anchor(source: &SourceFile, decl: NodeIndex) -> u32 {
    if let Some(name) = declaration_name(source, decl) {
        return source.arena().span(name).0;
    }
    if let Some(parent) = source.arena().parent(decl) {
        let name = match source.arena().get(parent) {
            sigswap_syntax::Node::VariableDeclaration(data) => Some(data.name),
            sigswap_syntax::Node::PropertyAssignment(data) => Some(data.name),
            _ => None,
        };
        if let Some(name) = name {
            return source.arena().span(name).0;
        }
    }
    source.arena().span(decl).0
}

/// Display record for one parameter.
pub fn parameter_info(source: &SourceFile, param: NodeIndex) -> ParameterInfo {
    let arena = source.arena();
    let (name, is_rest, type_annotation) = match arena.get(param) {
        sigswap_syntax::Node::Parameter(data) => (data.name, data.dot_dot_dot, data.type_annotation),
        _ => {
            return ParameterInfo {
                name: String::new(),
                ty: "any".to_string(),
                is_rest: false,
            };
        }
    };
    let name = arena
        .identifier_text(name)
        .unwrap_or_default()
        .to_string();
    let ty = match type_annotation {
        Some(annotation) => source.text_of(annotation).to_string(),
        None => "any".to_string(),
    };
    ParameterInfo { name, ty, is_rest }
}

/// Whether the parameter list declares a `this` receiver first. Such a
/// parameter is a type-only artifact and never reordered.
pub fn has_this_receiver(source: &SourceFile, params: &[NodeIndex]) -> bool {
    let Some(&first) = params.first() else {
        return false;
    };
    let arena = source.arena();
    match arena.get(first) {
        sigswap_syntax::Node::Parameter(data) => {
            arena.identifier_text(data.name) == Some("this")
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/declarations_tests.rs"]
mod declarations_tests;
