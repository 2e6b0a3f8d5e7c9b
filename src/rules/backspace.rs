//! Backspace inside leading indentation snaps back to the previous indent stop.

use crate::editable::{DocumentState, SelectionRange};
use crate::keymap::{KeyCode, Keystroke};
use crate::util::is_indent_only;

use super::RuleContext;

pub(super) fn accepts(key: &Keystroke, _ctx: &RuleContext<'_>) -> bool {
    key.is_plain(KeyCode::Backspace)
}

pub(super) fn apply(
    ctx: &RuleContext<'_>,
    state: &DocumentState,
    _key: &Keystroke,
) -> Option<DocumentState> {
    let sel = state.selection();
    if !sel.is_caret() {
        return None;
    }

    let buffer = state.buffer();
    let line_start = buffer.line_start(sel.start);
    let prefix = buffer.slice(line_start..sel.start);
    if !is_indent_only(&prefix) {
        return None;
    }

    let delete = chars_to_delete(&prefix, ctx.indent_width());
    let from = sel.start - delete;
    Some(state.replace(from..sel.start, "", SelectionRange::caret(from)))
}

/// How many characters a backspace removes from a whitespace-only prefix
fn chars_to_delete(prefix: &str, width: usize) -> usize {
    if prefix.ends_with('\t') {
        return 1;
    }
    let trailing = prefix.chars().rev().take_while(|c| *c == ' ').count();
    match trailing % width {
        0 => width,
        rem => rem,
    }
}
