//! Source location tracking (byte offsets).

use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` into a source file.
///
/// Spans are attached to syntax nodes by the host that builds the tree; the
/// analysis core only carries them through to diagnostics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const ZERO: Span = Span { start: 0, end: 0 };

    pub fn new(start: u32, end: u32) -> Span {
        debug_assert!(start <= end);
        Span { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, pos: u32) -> bool {
        self.start <= pos && pos < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_len_and_contains() {
        let span = Span::new(3, 10);
        assert_eq!(span.len(), 7);
        assert!(span.contains(3));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert!(!Span::ZERO.contains(0));
    }
}
