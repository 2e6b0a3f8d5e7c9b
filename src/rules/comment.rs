//! Line-comment toggle over the lines spanned by the selection.

use crate::editable::{DocumentState, SelectionRange};
use crate::keymap::Keystroke;
use crate::util::{leading_indent, map_lines};

use super::RuleContext;

pub(super) fn accepts(key: &Keystroke, ctx: &RuleContext<'_>) -> bool {
    key.matches(&ctx.comment_toggle) && ctx.language.comment_marker().is_some()
}

pub(super) fn apply(
    ctx: &RuleContext<'_>,
    state: &DocumentState,
    _key: &Keystroke,
) -> Option<DocumentState> {
    let marker = ctx.language.comment_marker()?;
    let block = state.buffer().line_block(state.selection().range());
    let text = state.buffer().slice(block.clone());
    let edited = toggle_lines(&text, marker);

    let new_end = block.start + edited.chars().count();
    Some(state.replace(
        block.clone(),
        &edited,
        SelectionRange::new(block.start, new_end),
    ))
}

/// A line counts as commented when the marker follows its indentation
fn is_commented(line: &str, marker: &str) -> bool {
    line[leading_indent(line).len()..].starts_with(marker)
}

/// Uncomment when every line is commented (blank lines never are), otherwise
/// put `marker + " "` at the very start of every line
fn toggle_lines(block: &str, marker: &str) -> String {
    let all_commented = block.split('\n').all(|line| is_commented(line, marker));

    if all_commented {
        map_lines(block, |line| {
            let indent = leading_indent(line);
            let rest = &line[indent.len() + marker.len()..];
            let rest = rest.strip_prefix(' ').unwrap_or(rest);
            format!("{}{}", indent, rest)
        })
    } else {
        map_lines(block, |line| format!("{} {}", marker, line))
    }
}
