//! Buffer and selection state for the editing engine.
//!
//! # Architecture
//!
//! - [`TextBuffer`]: immutable-per-edit text backed by `ropey::Rope`
//! - [`SelectionRange`]: ordered `(start, end)` char offsets; a caret when equal
//! - [`DocumentState`]: buffer and selection as one atomic value
//! - [`OffsetUnit`]: the unit the host speaks (chars or UTF-16 code units)
//!
//! # Example
//!
//! ```
//! use codepad::editable::{DocumentState, SelectionRange};
//!
//! let state = DocumentState::new("hello").select(SelectionRange::caret(5));
//! let next = state.insert_text("!");
//!
//! assert_eq!(next.text(), "hello!");
//! assert_eq!(state.text(), "hello");
//! ```

mod buffer;
mod offset;
mod selection;
mod state;

pub use buffer::TextBuffer;
pub use offset::OffsetUnit;
pub use selection::SelectionRange;
pub use state::DocumentState;
