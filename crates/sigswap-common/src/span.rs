//! Text spans in the tsserver wire shape: a start offset and a length.

use serde::{Deserialize, Serialize};

/// A half-open region of source text, `[start, start + length)`.
///
/// Offsets are byte offsets into the file's text. This is the shape that
/// goes over the wire, so it serializes as `{ "start": N, "length": M }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpan {
    pub start: u32,
    pub length: u32,
}

impl TextSpan {
    pub fn new(start: u32, length: u32) -> TextSpan {
        TextSpan { start, length }
    }

    /// Builds a span from a `[pos, end)` pair.
    pub fn from_bounds(pos: u32, end: u32) -> TextSpan {
        debug_assert!(end >= pos);
        TextSpan { start: pos, length: end - pos }
    }

    pub fn end(&self) -> u32 {
        self.start + self.length
    }

    /// Whether `position` falls inside the span, end exclusive.
    pub fn contains(&self, position: u32) -> bool {
        position >= self.start && position < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_and_containment() {
        let span = TextSpan::from_bounds(10, 14);
        assert_eq!(span.start, 10);
        assert_eq!(span.length, 4);
        assert_eq!(span.end(), 14);
        assert!(span.contains(10));
        assert!(span.contains(13));
        assert!(!span.contains(14));
        assert!(!span.contains(9));
    }

    #[test]
    fn empty_span_contains_nothing() {
        let span = TextSpan::new(5, 0);
        assert!(!span.contains(5));
    }
}
