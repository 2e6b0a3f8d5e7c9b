//! Offset units exchanged with the host surface.

use serde::{Deserialize, Serialize};

use super::buffer::TextBuffer;
use super::selection::SelectionRange;

/// Unit the host uses for selection offsets.
///
/// The engine works in chars internally; browser text areas report UTF-16
/// code units, so their adapters pick `Utf16`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    #[default]
    Chars,
    Utf16,
}

impl OffsetUnit {
    /// Host offsets -> char offsets, clamped to the buffer
    pub fn to_chars(self, buffer: &TextBuffer, selection: SelectionRange) -> SelectionRange {
        match self {
            OffsetUnit::Chars => selection.clamped(buffer.len_chars()),
            OffsetUnit::Utf16 => selection.map(|offset| buffer.utf16_to_char(offset)),
        }
    }

    /// Char offsets -> host offsets
    pub fn from_chars(self, buffer: &TextBuffer, selection: SelectionRange) -> SelectionRange {
        match self {
            OffsetUnit::Chars => selection,
            OffsetUnit::Utf16 => selection.map(|offset| buffer.char_to_utf16(offset)),
        }
    }
}
