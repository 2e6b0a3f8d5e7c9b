//! Tab / Shift+Tab indentation tests

mod common;

use codepad::{Engine, EngineConfig, LanguageMode, RuleKind, SelectionRange};
use common::{parse_fixture, press, press_py, render_fixture, shift_tab, tab};

// ========================================================================
// Caret
// ========================================================================

#[test]
fn test_tab_at_caret_inserts_unit() {
    assert_eq!(press_py("x = 1‸", tab()), "x = 1    ‸");
    assert_eq!(press_py("‸foo", tab()), "    ‸foo");
}

#[test]
fn test_tab_at_caret_reports_rule() {
    let (_, rule) = press("‸", LanguageMode::PlainText, tab());
    assert_eq!(rule, Some(RuleKind::Indent));
}

#[test]
fn test_shift_tab_at_caret_dedents_line() {
    assert_eq!(press_py("    foo‸", shift_tab()), "«foo»");
    assert_eq!(press_py("a\n      b‸\nc", shift_tab()), "a\n«  b»\nc");
}

#[test]
fn test_custom_width() {
    let config = EngineConfig {
        indent_width: 2,
        ..Default::default()
    };
    let mut engine = Engine::with_config("", LanguageMode::Python, config).unwrap();
    let out = engine.handle("", SelectionRange::caret(0), &tab());
    assert_eq!(out.text, "  ");
    assert_eq!(out.selection, SelectionRange::caret(2));
}

// ========================================================================
// Block indent
// ========================================================================

#[test]
fn test_indent_expands_to_whole_lines() {
    assert_eq!(
        press_py("de«f f():\n    re»turn 1", tab()),
        "«    def f():\n        return 1»"
    );
}

#[test]
fn test_indent_single_line_selection() {
    assert_eq!(press_py("a\nb«c»d\ne", tab()), "a\n«    bcd»\ne");
}

#[test]
fn test_indent_includes_empty_lines() {
    assert_eq!(press_py("«a\n\nb»", tab()), "«    a\n    \n    b»");
}

#[test]
fn test_selection_ending_at_line_start_includes_that_line() {
    assert_eq!(press_py("«a\n»b", tab()), "«    a\n    b»");
}

// ========================================================================
// Block dedent
// ========================================================================

#[test]
fn test_dedent_strips_one_unit() {
    assert_eq!(
        press_py("«        a\n    b»", shift_tab()),
        "«    a\nb»"
    );
}

#[test]
fn test_dedent_partial_indent() {
    assert_eq!(press_py("«  a\n b\nc»", shift_tab()), "«a\nb\nc»");
}

#[test]
fn test_dedent_leaves_tabs() {
    assert_eq!(press_py("«\ta\n  \tb»", shift_tab()), "«\ta\n\tb»");
}

#[test]
fn test_repeated_dedent_converges() {
    let mut fixture = "«           x\n  y»".to_string();
    for _ in 0..5 {
        fixture = press_py(&fixture, shift_tab());
    }
    assert_eq!(fixture, "«x\ny»");
}

#[test]
fn test_indent_then_dedent_restores_block() {
    let original = "«def f():\n    if x:\n        pass»";
    let indented = press_py(original, tab());
    assert_eq!(press_py(&indented, shift_tab()), original);
}

#[test]
fn test_result_selection_covers_block() {
    let (text, sel) = parse_fixture("one\nt«w»o\nthree");
    let mut engine = Engine::new(&text, LanguageMode::Python);
    let out = engine.handle(&text, sel, &tab());
    assert_eq!(render_fixture(&out.text, out.selection), "one\n«    two»\nthree");
}
