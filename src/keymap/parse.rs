//! Parsing of key strings such as `"cmd+/"` or `"shift+tab"` into Keystrokes.

use super::types::{KeyCode, Keystroke, Modifiers};

/// Parse a key string like "cmd+shift+/" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let trimmed = key_str.trim();
    if trimmed.is_empty() {
        return Err(KeymapError::InvalidKey(key_str.to_string()));
    }

    // A trailing "+" is the plus key itself ("+" or "ctrl++")
    let (mod_part, key_part) = match trimmed.strip_suffix('+') {
        Some(rest) if rest.is_empty() || rest.ends_with('+') => {
            (rest.strip_suffix('+').unwrap_or(rest), Some("+"))
        }
        _ => ("", None),
    };

    let parts: Vec<&str> = match key_part {
        Some(_) if mod_part.is_empty() => Vec::new(),
        Some(_) => mod_part.split('+').collect(),
        None => trimmed.split('+').collect(),
    };

    let mut mods = Modifiers::NONE;
    let mut key = key_part.map(|_| KeyCode::Char('+'));

    for part in parts {
        let part_lower = part.to_lowercase();
        match part_lower.as_str() {
            "cmd" | "command" => {
                // Matches ctrl or meta, see Modifiers::matches_binding
                mods = mods | Modifiers::META;
            }
            "ctrl" | "control" => {
                mods = mods | Modifiers::CTRL;
            }
            "shift" => {
                mods = mods | Modifiers::SHIFT;
            }
            "alt" | "option" | "opt" => {
                mods = mods | Modifiers::ALT;
            }
            "meta" | "super" | "win" => {
                mods = mods | Modifiers::META;
            }
            _ => {
                if key.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key = Some(parse_key_code(part)?);
            }
        }
    }

    let key =
        key.ok_or_else(|| KeymapError::MissingKey(format!("No key found in binding: {}", key_str)))?;

    Ok(Keystroke::new(key, mods))
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Char(' ')),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),

        // Named punctuation that would otherwise clash with the key string syntax
        "plus" => Ok(KeyCode::Char('+')),
        "comma" => Ok(KeyCode::Char(',')),
        "slash" => Ok(KeyCode::Char('/')),

        other => match other.strip_prefix('f').map(str::parse::<u8>) {
            Some(Ok(n)) if (1..=24).contains(&n) => Ok(KeyCode::F(n)),
            _ => Err(KeymapError::InvalidKey(format!("Unknown key: {}", key))),
        },
    }
}

/// Errors that can occur when parsing key strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    InvalidKey(String),
    MissingKey(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::MissingKey(k) => write!(f, "Missing key: {}", k),
        }
    }
}

impl std::error::Error for KeymapError {}
