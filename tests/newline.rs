//! Enter key indentation tests

mod common;

use codepad::{LanguageMode, RuleKind};
use common::{enter, press, press_py};

#[test]
fn test_plain_line_keeps_no_indent() {
    assert_eq!(press_py("a = 1‸\nb = 2", enter()), "a = 1\n‸\nb = 2");
}

#[test]
fn test_inherits_indent() {
    assert_eq!(press_py("    x = 1‸", enter()), "    x = 1\n    ‸");
    assert_eq!(press_py("\t\tx‸", enter()), "\t\tx\n\t\t‸");
}

#[test]
fn test_block_opener_adds_unit() {
    assert_eq!(press_py("for x in y:‸", enter()), "for x in y:\n    ‸");
    assert_eq!(
        press_py("def f():\n    if x:‸", enter()),
        "def f():\n    if x:\n        ‸"
    );
}

#[test]
fn test_opener_check_ignores_trailing_whitespace() {
    assert_eq!(press_py("else:  ‸", enter()), "else:  \n    ‸");
}

#[test]
fn test_opener_only_counts_text_before_caret() {
    assert_eq!(press_py("if x‸:", enter()), "if x\n‸:");
}

#[test]
fn test_brace_modes_have_no_opener() {
    let (out, _) = press("for x in y:‸", LanguageMode::Cpp, enter());
    assert_eq!(out, "for x in y:\n‸");
    let (out, _) = press("  if (x) {‸", LanguageMode::JavaScript, enter());
    assert_eq!(out, "  if (x) {\n  ‸");
}

#[test]
fn test_selection_replaced() {
    assert_eq!(press_py("    a«bc»d", enter()), "    a\n    ‸d");
}

#[test]
fn test_multiline_selection_uses_start_line() {
    assert_eq!(press_py("  x«1\n    y»2", enter()), "  x\n  ‸2");
}

#[test]
fn test_whitespace_only_line() {
    assert_eq!(press_py("    ‸", enter()), "    \n    ‸");
}

#[test]
fn test_reports_rule() {
    let (_, rule) = press("‸", LanguageMode::PlainText, enter());
    assert_eq!(rule, Some(RuleKind::Newline));
}
