//! codepad - code-editor ergonomics for a plain text surface
//!
//! This crate turns raw key events into whole-buffer edits: indentation-aware
//! newlines, block indent/dedent on Tab, bracket and quote pairing, and
//! line-comment toggling. The [`Engine`] is a pure state machine over a
//! text buffer and a selection; [`host::HostAdapter`] wires it to a
//! rendering surface.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod engine;
pub mod host;
pub mod keymap;
pub mod language;
pub mod rules;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::{BracketPair, ConfigError, EngineConfig};
pub use editable::{DocumentState, OffsetUnit, SelectionRange, TextBuffer};
pub use engine::{EditOutcome, Engine};
pub use host::{HostAdapter, MemorySurface, Surface, SurfaceError};
pub use keymap::{keystroke_from_dom, parse_key_string, KeyCode, Keystroke, Modifiers};
pub use language::LanguageMode;
pub use rules::RuleKind;
