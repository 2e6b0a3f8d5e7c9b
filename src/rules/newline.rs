//! Enter: carry the current line's indentation onto the new line.

use crate::editable::{DocumentState, SelectionRange};
use crate::keymap::{KeyCode, Keystroke};
use crate::util::leading_indent;

use super::RuleContext;

pub(super) fn accepts(key: &Keystroke, _ctx: &RuleContext<'_>) -> bool {
    key.is_plain(KeyCode::Enter)
}

pub(super) fn apply(
    ctx: &RuleContext<'_>,
    state: &DocumentState,
    _key: &Keystroke,
) -> Option<DocumentState> {
    let sel = state.selection();
    let buffer = state.buffer();

    // Only the text left of the caret decides the indentation
    let line_start = buffer.line_start(sel.start);
    let before_caret = buffer.slice(line_start..sel.start);

    let mut insert = String::from("\n");
    insert.push_str(leading_indent(&before_caret));
    if ctx.language.opens_block(&before_caret) {
        insert.push_str(&ctx.config.indent_unit());
    }

    let caret = sel.start + insert.chars().count();
    Some(state.replace(sel.range(), &insert, SelectionRange::caret(caret)))
}
