use super::*;
use crate::protocol::TextChange;
use sigswap_syntax::{Node, NodeIndex, SourceFile, SyntaxKind};

fn parse(text: &str) -> SourceFile {
    SourceFile::parse("main.ts".to_string(), text.to_string())
}

fn call_arguments(source: &SourceFile) -> Vec<NodeIndex> {
    let call = source
        .first_node_of_kind(SyntaxKind::CallExpression)
        .expect("fixture should contain a call");
    match source.arena().get(call) {
        Node::CallExpression(data) => data.arguments.clone(),
        _ => unreachable!(),
    }
}

fn declared_parameters(source: &SourceFile) -> Vec<NodeIndex> {
    let decl = source
        .first_node_of_kind(SyntaxKind::FunctionDeclaration)
        .expect("fixture should contain a function");
    match source.arena().get(decl).as_function_like() {
        Some(data) => data.parameters.clone(),
        None => unreachable!(),
    }
}

fn orders(indices: &[u32]) -> Vec<Option<u32>> {
    indices.iter().map(|&i| Some(i)).collect()
}

fn apply(text: &str, change: &TextChange) -> String {
    let start = change.span.start as usize;
    let end = change.span.end() as usize;
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push_str(&change.new_text);
    out.push_str(&text[end..]);
    out
}

#[test]
fn round_trips_a_pure_permutation() {
    let text = "f(one,  two,\n  three);";
    let source = parse(text);
    let args = call_arguments(&source);
    let change = calc_text_change(&source, &args, &orders(&[2, 0, 1])).expect("should reorder");
    let shuffled = apply(text, &change);
    assert_eq!(shuffled, "f(three,  one,\n  two);");

    // The inverse permutation restores the original text, separators
    // included.
    let source = parse(&shuffled);
    let args = call_arguments(&source);
    let change = calc_text_change(&source, &args, &orders(&[1, 2, 0])).expect("should reorder");
    assert_eq!(apply(&shuffled, &change), text);
}

#[test]
fn deleting_the_middle_element_keeps_the_tail() {
    let text = "f(a0, a1, a2);";
    let source = parse(text);
    let args = call_arguments(&source);
    let change = calc_text_change(&source, &args, &orders(&[0, 2])).expect("should delete");
    assert_eq!(apply(text, &change), "f(a0, a2);");
}

#[test]
fn mid_list_gap_renders_the_placeholder() {
    let text = "g(a0, a1);";
    let source = parse(text);
    let args = call_arguments(&source);
    let change = calc_text_change(&source, &args, &[Some(1), None, Some(0)])
        .expect("should reorder");
    assert_eq!(apply(text, &change), "g(a1, undefined, a0);");
}

#[test]
fn trailing_placeholders_are_trimmed() {
    let text = "g(a0, a1);";
    let source = parse(text);
    let args = call_arguments(&source);
    // Slot 2 resolves to the placeholder and sits at the tail, so it is
    // dropped and the list comes out unchanged.
    assert!(calc_text_change(&source, &args, &[Some(0), Some(1), None]).is_none());
}

#[test]
fn leading_placeholder_survives() {
    let text = "f(a0, a1);";
    let source = parse(text);
    let args = call_arguments(&source);
    let change = calc_text_change(&source, &args, &orders(&[2, 0, 1])).expect("should reorder");
    assert_eq!(apply(text, &change), "f(undefined, a0, a1);");
}

#[test]
fn short_call_gets_a_filler_for_the_moved_slot() {
    let text = "g(a);";
    let source = parse(text);
    let args = call_arguments(&source);
    let change = calc_text_change(&source, &args, &orders(&[1, 0])).expect("should reorder");
    assert_eq!(apply(text, &change), "g(undefined, a);");
}

#[test]
fn spread_blocks_rewrites_that_reach_it() {
    let text = "rest(a0, a1, ...args);";
    let source = parse(text);
    let args = call_arguments(&source);
    // Moving the spread itself, or deleting in front of it, is unsafe.
    assert!(calc_text_change(&source, &args, &orders(&[2, 0, 1])).is_none());
    assert!(calc_text_change(&source, &args, &orders(&[1, 2])).is_none());
    // A rewrite confined to the prefix is fine.
    let change = calc_text_change(&source, &args, &orders(&[1, 0, 2])).expect("should reorder");
    assert_eq!(apply(text, &change), "rest(a1, a0, ...args);");
}

#[test]
fn rest_parameter_blocks_declaration_rewrites() {
    let text = "function rest(a0: number, ...tail: number[]) {}";
    let source = parse(text);
    let params = declared_parameters(&source);
    assert!(calc_text_change(&source, &params, &orders(&[1, 0])).is_none());
}

#[test]
fn identity_and_empty_lists_produce_no_change() {
    let text = "f(a0, a1, a2);";
    let source = parse(text);
    let args = call_arguments(&source);
    assert!(calc_text_change(&source, &args, &orders(&[0, 1, 2])).is_none());

    let empty = parse("h();");
    let args = call_arguments(&empty);
    assert!(calc_text_change(&empty, &args, &orders(&[1, 0])).is_none());
}

#[test]
fn parameters_move_with_types_and_defaults() {
    let text = "function f(a: string, b = 2) {}";
    let source = parse(text);
    let params = declared_parameters(&source);
    let change = calc_text_change(&source, &params, &orders(&[1, 0])).expect("should reorder");
    assert_eq!(apply(text, &change), "function f(b = 2, a: string) {}");
}
