//! Rope-backed text buffer for the editing engine.
//!
//! A `TextBuffer` is never edited in place by the engine: [`TextBuffer::splice`]
//! returns a brand-new buffer, and cloning is cheap because `ropey::Rope`
//! shares its chunks. All offsets are char indices; out-of-range offsets are
//! clamped to `[0, len_chars]`.

use ropey::Rope;
use std::fmt;
use std::ops::Range;

/// Immutable-per-edit text content.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a TextBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Clamp a char offset into `[0, len_chars]`
    pub fn clamp(&self, offset: usize) -> usize {
        offset.min(self.len_chars())
    }

    /// Character at offset, None if out of bounds
    pub fn char_at(&self, offset: usize) -> Option<char> {
        if offset < self.len_chars() {
            Some(self.rope.char(offset))
        } else {
            None
        }
    }

    /// Character immediately before offset
    pub fn char_before(&self, offset: usize) -> Option<char> {
        let offset = self.clamp(offset);
        if offset == 0 {
            None
        } else {
            Some(self.rope.char(offset - 1))
        }
    }

    /// Offset of the first character of the line containing `offset`.
    ///
    /// An offset sitting right after a `\n` belongs to the following line.
    pub fn line_start(&self, offset: usize) -> usize {
        let offset = self.clamp(offset);
        let line = self.rope.char_to_line(offset);
        self.rope.line_to_char(line)
    }

    /// Offset of the `\n` terminating the line containing `offset`, or the
    /// buffer end when that line has no trailing newline.
    pub fn line_end(&self, offset: usize) -> usize {
        let offset = self.clamp(offset);
        let line = self.rope.char_to_line(offset);
        if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - 1
        } else {
            self.len_chars()
        }
    }

    /// Whole-line span covering `range`: from the start of the line holding
    /// `range.start` to the end of the line holding `range.end`.
    pub fn line_block(&self, range: Range<usize>) -> Range<usize> {
        let start = self.line_start(range.start);
        let end = self.line_end(range.end.max(range.start));
        start..end
    }

    /// Get slice of text as String (by character indices)
    pub fn slice(&self, range: Range<usize>) -> String {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end);
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    /// Return a new buffer with `range` replaced by `text`
    pub fn splice(&self, range: Range<usize>, text: &str) -> Self {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end).max(start);
        let mut rope = self.rope.clone();
        if start < end {
            rope.remove(start..end);
        }
        if !text.is_empty() {
            rope.insert(start, text);
        }
        Self { rope }
    }

    /// Convert a char offset to a UTF-16 code unit offset
    pub fn char_to_utf16(&self, offset: usize) -> usize {
        self.rope.char_to_utf16_cu(self.clamp(offset))
    }

    /// Convert a UTF-16 code unit offset to a char offset.
    ///
    /// An offset falling inside a surrogate pair resolves to the char that
    /// pair encodes.
    pub fn utf16_to_char(&self, offset: usize) -> usize {
        let max = self.rope.len_utf16_cu();
        self.rope.utf16_cu_to_char(offset.min(max))
    }

    /// Compare content against a string without allocating
    pub fn matches_text(&self, text: &str) -> bool {
        self.rope == text
    }

    /// Get full content as String
    pub fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl PartialEq for TextBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.rope == other.rope
    }
}

impl Eq for TextBuffer {}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}
