//! Language modes and their editing metadata
//!
//! A mode selects the line-comment marker and whether a trailing block opener
//! (Python's `:`) deepens the indentation of the next line.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported language modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageMode {
    #[default]
    PlainText,
    /// Indentation-significant
    Python,
    // Brace-delimited
    Cpp,
    JavaScript,
    Rust,
}

impl LanguageMode {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "py" | "pyw" | "pyi" => LanguageMode::Python,
            "cpp" | "cc" | "cxx" | "c" | "h" | "hpp" | "hh" => LanguageMode::Cpp,
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" => LanguageMode::JavaScript,
            "rs" => LanguageMode::Rust,
            _ => LanguageMode::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageMode::PlainText)
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageMode::PlainText => "Plain Text",
            LanguageMode::Python => "Python",
            LanguageMode::Cpp => "C++",
            LanguageMode::JavaScript => "JavaScript",
            LanguageMode::Rust => "Rust",
        }
    }

    /// Line-comment marker, None when the mode has no comments
    pub fn comment_marker(&self) -> Option<&'static str> {
        match self {
            LanguageMode::PlainText => None,
            LanguageMode::Python => Some("#"),
            LanguageMode::Cpp | LanguageMode::JavaScript | LanguageMode::Rust => Some("//"),
        }
    }

    /// Character that, ending a line, opens an indented block
    pub fn block_opener(&self) -> Option<char> {
        match self {
            LanguageMode::Python => Some(':'),
            _ => None,
        }
    }

    /// True when `line` (text before the caret) ends with this mode's block
    /// opener, ignoring trailing whitespace
    pub fn opens_block(&self, line: &str) -> bool {
        match self.block_opener() {
            Some(opener) => line.trim_end().ends_with(opener),
            None => false,
        }
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LanguageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "plaintext" | "plain_text" | "text" | "txt" => Ok(LanguageMode::PlainText),
            "python" | "py" => Ok(LanguageMode::Python),
            "cpp" | "c++" | "cxx" | "c" => Ok(LanguageMode::Cpp),
            "javascript" | "js" | "typescript" | "ts" => Ok(LanguageMode::JavaScript),
            "rust" | "rs" => Ok(LanguageMode::Rust),
            other => Err(format!("Unknown language mode: {}", other)),
        }
    }
}
