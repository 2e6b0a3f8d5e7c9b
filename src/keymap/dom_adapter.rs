//! Adapter to convert browser `KeyboardEvent` data to our Keystroke type

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert a DOM `KeyboardEvent.key` value plus modifier flags to a Keystroke
///
/// Returns None if the key cannot be mapped (e.g., "Shift", "Unidentified",
/// dead keys or IME composition values).
pub fn keystroke_from_dom(
    key: &str,
    shift: bool,
    ctrl: bool,
    alt: bool,
    meta: bool,
) -> Option<Keystroke> {
    let mods = Modifiers::new(ctrl, shift, alt, meta);

    let key_code = match key {
        "Enter" => KeyCode::Enter,
        "Escape" | "Esc" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Delete" | "Del" => KeyCode::Delete,
        "Spacebar" => KeyCode::Char(' '),

        // Arrows
        "ArrowUp" | "Up" => KeyCode::Up,
        "ArrowDown" | "Down" => KeyCode::Down,
        "ArrowLeft" | "Left" => KeyCode::Left,
        "ArrowRight" | "Right" => KeyCode::Right,

        // Navigation
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,

        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                // Printable keys report the produced character ("(", "A", " ")
                (Some(c), None) => KeyCode::Char(c),
                _ => match other.strip_prefix('F').map(str::parse::<u8>) {
                    Some(Ok(n)) if (1..=24).contains(&n) => KeyCode::F(n),
                    _ => return None,
                },
            }
        }
    };

    Some(Keystroke::new(key_code, mods))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_key() {
        let stroke = keystroke_from_dom("(", true, false, false, false).unwrap();
        assert_eq!(stroke.key, KeyCode::Char('('));
        assert!(stroke.mods.shift());
        assert_eq!(stroke.typed_char(), Some('('));
    }

    #[test]
    fn test_uppercase_is_preserved() {
        let stroke = keystroke_from_dom("A", true, false, false, false).unwrap();
        assert_eq!(stroke.key, KeyCode::Char('A'));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            keystroke_from_dom("Tab", false, false, false, false).unwrap().key,
            KeyCode::Tab
        );
        assert_eq!(
            keystroke_from_dom("Enter", false, false, false, false).unwrap().key,
            KeyCode::Enter
        );
        assert_eq!(
            keystroke_from_dom("Backspace", false, false, false, false).unwrap().key,
            KeyCode::Backspace
        );
        assert_eq!(
            keystroke_from_dom("F12", false, false, false, false).unwrap().key,
            KeyCode::F(12)
        );
    }

    #[test]
    fn test_cmd_slash() {
        let stroke = keystroke_from_dom("/", false, false, false, true).unwrap();
        assert!(stroke.mods.meta());
        assert_eq!(stroke.typed_char(), None);
    }

    #[test]
    fn test_unmapped_keys() {
        assert!(keystroke_from_dom("Shift", true, false, false, false).is_none());
        assert!(keystroke_from_dom("Unidentified", false, false, false, false).is_none());
        assert!(keystroke_from_dom("Dead", false, false, false, false).is_none());
        assert!(keystroke_from_dom("", false, false, false, false).is_none());
    }
}
