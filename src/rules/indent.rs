//! Tab / Shift+Tab block indent and dedent.

use crate::editable::{DocumentState, SelectionRange};
use crate::keymap::{KeyCode, Keystroke};
use crate::util::map_lines;

use super::RuleContext;

pub(super) fn accepts(key: &Keystroke, _ctx: &RuleContext<'_>) -> bool {
    key.is_plain(KeyCode::Tab)
}

pub(super) fn apply(
    ctx: &RuleContext<'_>,
    state: &DocumentState,
    key: &Keystroke,
) -> Option<DocumentState> {
    let width = ctx.indent_width();
    let sel = state.selection();
    let dedent = key.mods.shift();

    if sel.is_caret() && !dedent {
        let unit = ctx.config.indent_unit();
        return Some(state.replace(sel.range(), &unit, SelectionRange::caret(sel.start + width)));
    }

    let block = state.buffer().line_block(sel.range());
    let text = state.buffer().slice(block.clone());
    let edited = if dedent {
        dedent_lines(&text, width)
    } else {
        indent_lines(&text, &ctx.config.indent_unit())
    };

    let new_end = block.start + edited.chars().count();
    Some(state.replace(
        block.clone(),
        &edited,
        SelectionRange::new(block.start, new_end),
    ))
}

/// Prepend `unit` to every line
fn indent_lines(block: &str, unit: &str) -> String {
    map_lines(block, |line| format!("{}{}", unit, line))
}

/// Strip up to `width` leading spaces from every line
fn dedent_lines(block: &str, width: usize) -> String {
    map_lines(block, |line| {
        let strip = line.bytes().take(width).take_while(|b| *b == b' ').count();
        line[strip..].to_string()
    })
}
