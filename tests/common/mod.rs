//! Shared test helpers for integration tests
//!
//! Fixtures mark the selection inline: `‸` is the caret, `«` and `»` wrap a
//! selection. `"if x:‸"` is the text `"if x:"` with the caret at offset 5.
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use codepad::{Engine, KeyCode, Keystroke, LanguageMode, Modifiers, RuleKind, SelectionRange};

const CARET: char = '‸';
const SEL_START: char = '«';
const SEL_END: char = '»';

/// Split a marked fixture into plain text and a selection (char offsets)
pub fn parse_fixture(fixture: &str) -> (String, SelectionRange) {
    let mut text = String::new();
    let mut start = None;
    let mut end = None;
    let mut offset = 0;

    for c in fixture.chars() {
        match c {
            CARET => {
                start = Some(offset);
                end = Some(offset);
            }
            SEL_START => start = Some(offset),
            SEL_END => end = Some(offset),
            _ => {
                text.push(c);
                offset += 1;
            }
        }
    }

    let start = start.expect("fixture has no caret or selection marker");
    let end = end.expect("fixture selection is not closed");
    (text, SelectionRange::new(start, end))
}

/// Render text and selection back into the marker format
pub fn render_fixture(text: &str, selection: SelectionRange) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    for offset in 0..=text.chars().count() {
        if selection.is_caret() && offset == selection.start {
            out.push(CARET);
        } else if offset == selection.start {
            out.push(SEL_START);
        } else if offset == selection.end {
            out.push(SEL_END);
        }
        if let Some(c) = chars.next() {
            out.push(c);
        }
    }
    out
}

/// Press one key against a fixture; returns the resulting fixture and the rule
/// that handled it (None means the host would apply its default)
pub fn press(fixture: &str, language: LanguageMode, key: Keystroke) -> (String, Option<RuleKind>) {
    let (text, selection) = parse_fixture(fixture);
    let mut engine = Engine::new(&text, language);
    let outcome = engine.handle(&text, selection, &key);
    (render_fixture(&outcome.text, outcome.selection), outcome.rule)
}

/// Press one key and return only the resulting fixture
pub fn press_py(fixture: &str, key: Keystroke) -> String {
    press(fixture, LanguageMode::Python, key).0
}

pub fn tab() -> Keystroke {
    Keystroke::key(KeyCode::Tab)
}

pub fn shift_tab() -> Keystroke {
    Keystroke::new(KeyCode::Tab, Modifiers::SHIFT)
}

pub fn enter() -> Keystroke {
    Keystroke::key(KeyCode::Enter)
}

pub fn backspace() -> Keystroke {
    Keystroke::key(KeyCode::Backspace)
}

pub fn typed(c: char) -> Keystroke {
    Keystroke::char(c)
}

/// The default comment toggle as pressed on macOS
pub fn cmd_slash() -> Keystroke {
    Keystroke::char_with_mods('/', Modifiers::META)
}

/// The default comment toggle as pressed elsewhere
pub fn ctrl_slash() -> Keystroke {
    Keystroke::char_with_mods('/', Modifiers::CTRL)
}
