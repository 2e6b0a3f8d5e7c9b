//! Key event model for the editing engine
//!
//! This module provides:
//! - [`Keystroke`]: one key identity plus [`Modifiers`], used for events and bindings
//! - [`parse_key_string`]: configured bindings such as `"cmd+/"`
//! - [`keystroke_from_dom`]: the browser `KeyboardEvent.key` adapter
//!
//! # Architecture
//!
//! ```text
//! KeyboardEvent.key → keystroke_from_dom() → Keystroke → Engine::handle()
//! ```

mod dom_adapter;
mod parse;
mod types;

pub use dom_adapter::keystroke_from_dom;
pub use parse::{parse_key_string, KeymapError};
pub use types::{KeyCode, Keystroke, Modifiers};
