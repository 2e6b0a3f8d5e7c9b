//! Bracket and quote pairing: auto-insert, skip-over and paired deletion.

use crate::editable::{DocumentState, SelectionRange};
use crate::keymap::{KeyCode, Keystroke};

use super::RuleContext;

pub(super) fn accepts_opener(key: &Keystroke, ctx: &RuleContext<'_>) -> bool {
    key.typed_char()
        .is_some_and(|c| ctx.config.closer_for(c).is_some())
}

pub(super) fn accepts_closer(key: &Keystroke, ctx: &RuleContext<'_>) -> bool {
    key.typed_char().is_some_and(|c| ctx.config.is_closer(c))
}

pub(super) fn accepts_backspace(key: &Keystroke, _ctx: &RuleContext<'_>) -> bool {
    key.is_plain(KeyCode::Backspace)
}

/// Typing an opener wraps the selection, or inserts the pair around the caret
pub(super) fn insert_pair(
    ctx: &RuleContext<'_>,
    state: &DocumentState,
    key: &Keystroke,
) -> Option<DocumentState> {
    let open = key.typed_char()?;
    let close = ctx.config.closer_for(open)?;
    let sel = state.selection();

    if sel.is_caret() {
        // A quote typed right before the same quote steps over it instead
        if open == close && state.buffer().char_at(sel.start) == Some(close) {
            return None;
        }
        let pair: String = [open, close].iter().collect();
        return Some(state.replace(sel.range(), &pair, SelectionRange::caret(sel.start + 1)));
    }

    let wrapped = format!("{}{}{}", open, state.selected_text(), close);
    // Caret lands after the closer: start + opener + selection + closer
    let caret = sel.end + 2;
    Some(state.replace(sel.range(), &wrapped, SelectionRange::caret(caret)))
}

/// Typing a closer right before the same closer only moves the caret
pub(super) fn skip_closer(
    _ctx: &RuleContext<'_>,
    state: &DocumentState,
    key: &Keystroke,
) -> Option<DocumentState> {
    let close = key.typed_char()?;
    let sel = state.selection();
    if !sel.is_caret() || state.buffer().char_at(sel.start) != Some(close) {
        return None;
    }
    Some(state.select(SelectionRange::caret(sel.start + 1)))
}

/// Backspace between an opener and its closer removes both
pub(super) fn delete_pair(
    ctx: &RuleContext<'_>,
    state: &DocumentState,
    _key: &Keystroke,
) -> Option<DocumentState> {
    let sel = state.selection();
    if !sel.is_caret() {
        return None;
    }

    let buffer = state.buffer();
    let before = buffer.char_before(sel.start)?;
    let after = buffer.char_at(sel.start)?;
    if ctx.config.closer_for(before) != Some(after) {
        return None;
    }

    let opener_at = sel.start - 1;
    Some(state.replace(
        opener_at..sel.start + 1,
        "",
        SelectionRange::caret(opener_at),
    ))
}
