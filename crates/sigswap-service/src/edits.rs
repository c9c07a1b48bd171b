//! Rendering a reordered element list into one minimal text change.
//!
//! The same routine serves parameter lists and argument lists. Callers
//! describe the outcome as an `orders` array: slot `i` of the new list
//! holds old element `orders[i]`, or a filler when `None` or out of
//! range. The produced change replaces the region from the first old
//! element to the last, reusing the original separators between them.

use sigswap_common::TextSpan;
use sigswap_syntax::{Node, NodeIndex, SourceFile};

use crate::protocol::TextChange;

/// What a missing argument is spelled as.
const PLACEHOLDER: &str = "undefined";

/// Builds the text change for one list, or `None` when there is nothing
/// to do or the list cannot be rewritten safely.
pub fn calc_text_change(
    source: &SourceFile,
    list: &[NodeIndex],
    orders: &[Option<u32>],
) -> Option<TextChange> {
    let n = list.len();
    if n == 0 {
        return None;
    }

    // Highest index whose element does not keep its place. Everything at
    // or below it gets rewritten; everything above keeps its text.
    let mut hi: Option<usize> = None;
    for (i, slot) in orders.iter().enumerate() {
        if *slot == Some(i as u32) {
            continue;
        }
        if i < n {
            hi = Some(hi.map_or(i, |h| h.max(i)));
        }
        if let Some(j) = *slot {
            let j = j as usize;
            if j < n {
                hi = Some(hi.map_or(j, |h| h.max(j)));
            }
        }
    }
    if orders.len() < n {
        hi = Some(n - 1);
    }

    // A spread argument or rest parameter stands for an unknown number of
    // elements. If the rewrite would disturb it, give up on this list.
    if let Some(spread) = list.iter().position(|&idx| is_variadic(source, idx)) {
        if hi.is_some_and(|h| spread <= h) {
            return None;
        }
    }

    let mut pieces: Vec<(&str, bool)> = Vec::with_capacity(orders.len());
    for slot in orders {
        match slot {
            Some(j) if (*j as usize) < n => {
                pieces.push((source.text_of(list[*j as usize]), false));
            }
            _ => pieces.push((PLACEHOLDER, true)),
        }
    }
    // Fillers exist to hold later real elements in place. Trailing ones
    // hold nothing and would only pad the call.
    while pieces.last().is_some_and(|(_, filler)| *filler) {
        pieces.pop();
    }

    let mut new_text = String::new();
    for (k, (text, _)) in pieces.iter().enumerate() {
        if k > 0 {
            new_text.push_str(separator(source, list, k));
        }
        new_text.push_str(text);
    }

    let start = source.arena().span(list[0]).0;
    let end = source.arena().span(list[n - 1]).1;
    if source.text()[start as usize..end as usize] == new_text {
        return None;
    }
    Some(TextChange {
        span: TextSpan::from_bounds(start, end),
        new_text,
    })
}

fn is_variadic(source: &SourceFile, node: NodeIndex) -> bool {
    match source.arena().get(node) {
        Node::SpreadElement(_) => true,
        Node::Parameter(data) => data.dot_dot_dot,
        _ => false,
    }
}

/// Separator to place before new slot `k`: the original text between old
/// elements `k - 1` and `k` where the list still has one, so comma style
/// and line breaks survive the rewrite.
fn separator<'a>(source: &'a SourceFile, list: &[NodeIndex], k: usize) -> &'a str {
    if k < list.len() {
        let prev_end = source.arena().span(list[k - 1]).1;
        let next_pos = source.arena().span(list[k]).0;
        if prev_end <= next_pos {
            return &source.text()[prev_end as usize..next_pos as usize];
        }
    }
    ", "
}

#[cfg(test)]
#[path = "tests/edits_tests.rs"]
mod edits_tests;
