//! Locating calls whose callee matches one of a set of reference spans.

use sigswap_common::TextSpan;
use sigswap_syntax::{Node, NodeIndex, SourceFile};

/// Calls in `source` whose callee head lies inside one of `spans`.
///
/// `spans` must be sorted by start. The walk is pre-order and a cursor
/// into `spans` only moves forward, discarding spans that end before the
/// node under inspection, so one pass covers every span.
pub fn find_call_sites(source: &SourceFile, spans: &[TextSpan]) -> Vec<NodeIndex> {
    let mut sites = Vec::new();
    if !spans.is_empty() {
        let mut cursor = 0usize;
        walk(source, source.root(), spans, &mut cursor, &mut sites);
    }
    sites
}

fn walk(
    source: &SourceFile,
    node: NodeIndex,
    spans: &[TextSpan],
    cursor: &mut usize,
    sites: &mut Vec<NodeIndex>,
) {
    let (pos, _) = source.arena().span(node);
    while *cursor < spans.len() && spans[*cursor].end() <= pos {
        *cursor += 1;
    }
    if *cursor >= spans.len() {
        return;
    }
    if let Node::CallExpression(data) = source.arena().get(node) {
        if let Some(head) = callee_head(source, data.expression) {
            let (start, end) = source.arena().span(head);
            // Probe from the cursor without moving it: in a chained call
            // the outer callee head sits past spans the inner arguments
            // still need.
            let mut probe = *cursor;
            while probe < spans.len() && spans[probe].start < end {
                let span = spans[probe];
                if span.start >= start && span.end() <= end {
                    sites.push(node);
                    break;
                }
                probe += 1;
            }
        }
    }
    for child in source.arena().get_children(node) {
        walk(source, child, spans, cursor, sites);
    }
}

/// The identifier a call is spelled with: a bare identifier callee, or the
/// name of a property access. Other callee shapes have no stable head to
/// match a reference span against.
fn callee_head(source: &SourceFile, callee: NodeIndex) -> Option<NodeIndex> {
    match source.arena().get(callee) {
        Node::Identifier(_) => Some(callee),
        Node::PropertyAccessExpression(data) => Some(data.name),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/call_sites_tests.rs"]
mod call_sites_tests;
