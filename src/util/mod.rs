//! Utility modules

pub mod text;

pub use text::{is_indent_char, is_indent_only, leading_indent, map_lines};
