//! Host adapter tests: surface commits, deferred caret placement, default keys

mod common;

use codepad::{
    Engine, HostAdapter, KeyCode, Keystroke, LanguageMode, MemorySurface, SelectionRange, Surface,
    SurfaceError,
};
use common::{backspace, enter, tab, typed};

fn host(text: &str, selection: SelectionRange) -> HostAdapter<MemorySurface> {
    HostAdapter::new(
        Engine::new(text, LanguageMode::Python),
        MemorySurface::new(text, selection),
    )
}

fn type_all(host: &mut HostAdapter<MemorySurface>, keys: &[Keystroke]) {
    for key in keys {
        host.key_down(key).unwrap();
        host.flush_selection();
    }
}

#[test]
fn test_typing_a_function() {
    let mut host = host("", SelectionRange::caret(0));
    let mut keys: Vec<Keystroke> = "def f".chars().map(typed).collect();
    keys.push(typed('('));
    keys.push(typed(')'));
    keys.push(typed(':'));
    keys.push(enter());
    keys.extend("return 1".chars().map(typed));
    type_all(&mut host, &keys);

    assert_eq!(host.surface().text(), "def f():\n    return 1");
    assert_eq!(host.surface().selection(), SelectionRange::caret(21));
}

#[test]
fn test_default_backspace_deletes_one_char() {
    let mut host = host("abc", SelectionRange::caret(3));
    let out = host.key_down(&backspace()).unwrap();
    assert!(!out.handled);
    host.flush_selection();
    assert_eq!(host.surface().text(), "ab");
    assert_eq!(host.surface().selection(), SelectionRange::caret(2));
}

#[test]
fn test_default_backspace_deletes_selection() {
    let mut host = host("abcd", SelectionRange::new(1, 3));
    type_all(&mut host, &[backspace()]);
    assert_eq!(host.surface().text(), "ad");
    assert_eq!(host.surface().selection(), SelectionRange::caret(1));
}

#[test]
fn test_default_insert_replaces_selection() {
    let mut host = host("abcd", SelectionRange::new(1, 3));
    type_all(&mut host, &[typed('X')]);
    assert_eq!(host.surface().text(), "aXd");
}

#[test]
fn test_ignored_key_changes_nothing() {
    let mut host = host("ab", SelectionRange::caret(1));
    let out = host.key_down(&Keystroke::key(KeyCode::Left)).unwrap();
    assert!(!out.handled);
    assert_eq!(host.pending_selection(), None);
    assert_eq!(host.surface().text(), "ab");
}

#[test]
fn test_surface_edits_between_keys_are_respected() {
    let mut host = host("", SelectionRange::caret(0));
    // The user pastes text directly into the surface
    host.surface_mut().set_text("if ok:").unwrap();
    host.surface_mut()
        .set_selection(SelectionRange::caret(6))
        .unwrap();
    type_all(&mut host, &[enter()]);
    assert_eq!(host.surface().text(), "if ok:\n    ");
}

#[test]
fn test_unmount_before_flush_skips_caret_only() {
    let mut host = host("", SelectionRange::caret(0));
    host.key_down(&tab()).unwrap();
    host.surface_mut().unmount();

    assert!(!host.flush_selection());
    assert_eq!(host.pending_selection(), None);
    assert_eq!(host.engine().text(), "    ");
    assert_eq!(host.engine().selection(), SelectionRange::caret(4));
    // Surface kept the committed text, caret never moved
    assert_eq!(host.surface().text(), "    ");
    assert_eq!(host.surface().selection(), SelectionRange::caret(0));
}

#[test]
fn test_unmounted_surface_reports_error() {
    let mut surface = MemorySurface::new("", SelectionRange::caret(0));
    surface.unmount();
    assert!(!surface.is_mounted());
    assert_eq!(surface.set_text("x"), Err(SurfaceError::Unmounted));

    let mut host = HostAdapter::new(Engine::new("", LanguageMode::Python), surface);
    assert_eq!(
        host.key_down(&typed('a')).unwrap_err().to_string(),
        "surface is unmounted"
    );
}

#[test]
fn test_into_parts() {
    let mut host = host("", SelectionRange::caret(0));
    type_all(&mut host, &[typed('[')]);
    let (engine, surface) = host.into_parts();
    assert_eq!(engine.text(), "[]");
    assert_eq!(surface.selection(), SelectionRange::caret(1));
}
