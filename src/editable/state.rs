//! DocumentState - buffer and selection travelling together as one value.

use std::ops::Range;

use super::buffer::TextBuffer;
use super::selection::SelectionRange;

/// The text content and active selection of one editable surface.
///
/// Every edit produces a new `DocumentState`; the selection is clamped to
/// the buffer after every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentState {
    buffer: TextBuffer,
    selection: SelectionRange,
}

impl DocumentState {
    /// Create a state with the caret at the start of `text`
    pub fn new(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            selection: SelectionRange::caret(0),
        }
    }

    /// Pair a buffer with a selection, normalizing and clamping the selection
    pub fn with_selection(buffer: TextBuffer, selection: SelectionRange) -> Self {
        let selection = selection.clamped(buffer.len_chars());
        Self { buffer, selection }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// Get the text content as a String
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    /// Get the selected text (empty string for a caret)
    pub fn selected_text(&self) -> String {
        self.buffer.slice(self.selection.range())
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_caret()
    }

    /// Replace `range` with `text` and install `selection` on the result
    pub fn replace(&self, range: Range<usize>, text: &str, selection: SelectionRange) -> Self {
        Self::with_selection(self.buffer.splice(range, text), selection)
    }

    /// Same buffer, different selection
    pub fn select(&self, selection: SelectionRange) -> Self {
        Self::with_selection(self.buffer.clone(), selection)
    }

    /// Plain insertion: replace the selection with `text` and put the caret after it
    pub fn insert_text(&self, text: &str) -> Self {
        let start = self.selection.start;
        let caret = start + text.chars().count();
        self.replace(self.selection.range(), text, SelectionRange::caret(caret))
    }

    /// Plain backspace: delete the selection, or the character before the caret.
    /// Returns None when there is nothing to delete.
    pub fn delete_backward(&self) -> Option<Self> {
        if self.has_selection() {
            let start = self.selection.start;
            return Some(self.replace(self.selection.range(), "", SelectionRange::caret(start)));
        }

        let offset = self.selection.start;
        if offset == 0 {
            return None;
        }
        Some(self.replace(offset - 1..offset, "", SelectionRange::caret(offset - 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_caret_at_start() {
        let state = DocumentState::new("hello");
        assert_eq!(state.selection(), SelectionRange::caret(0));
        assert_eq!(state.text(), "hello");
    }

    #[test]
    fn test_with_selection_clamps() {
        let state = DocumentState::with_selection(
            TextBuffer::from_text("abc"),
            SelectionRange { start: 10, end: 1 },
        );
        assert_eq!(state.selection(), SelectionRange::new(1, 3));
        assert_eq!(state.selected_text(), "bc");
    }

    #[test]
    fn test_insert_replaces_selection() {
        let state = DocumentState::new("hello world").select(SelectionRange::new(0, 5));
        let next = state.insert_text("X");
        assert_eq!(next.text(), "X world");
        assert_eq!(next.selection(), SelectionRange::caret(1));
        // Original value is untouched
        assert_eq!(state.text(), "hello world");
    }

    #[test]
    fn test_delete_backward() {
        let state = DocumentState::new("hello").select(SelectionRange::caret(5));
        let next = state.delete_backward().unwrap();
        assert_eq!(next.text(), "hell");
        assert_eq!(next.selection(), SelectionRange::caret(4));
    }

    #[test]
    fn test_delete_backward_at_start_is_noop() {
        let state = DocumentState::new("hello");
        assert!(state.delete_backward().is_none());
    }

    #[test]
    fn test_delete_backward_removes_selection() {
        let state = DocumentState::new("hello").select(SelectionRange::new(1, 4));
        let next = state.delete_backward().unwrap();
        assert_eq!(next.text(), "ho");
        assert_eq!(next.selection(), SelectionRange::caret(1));
    }
}
