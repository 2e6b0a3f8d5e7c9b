//! Selection range over char offsets.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// An ordered pair of zero-based offsets. `start == end` is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Build a range, swapping the bounds if they arrive inverted
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Check if the range is a caret
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Swap the bounds if inverted
    pub fn normalized(self) -> Self {
        Self::new(self.start, self.end)
    }

    /// Normalize, then clamp both bounds into `[0, len]`
    pub fn clamped(self, len: usize) -> Self {
        let sel = self.normalized();
        Self {
            start: sel.start.min(len),
            end: sel.end.min(len),
        }
    }

    /// Map both bounds through an offset conversion
    pub fn map(self, f: impl Fn(usize) -> usize) -> Self {
        Self::new(f(self.start), f(self.end))
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for SelectionRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
