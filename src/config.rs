//! Engine configuration
//!
//! Stored in `~/.config/codepad/config.yaml`. Every field is optional:
//!
//! ```yaml
//! indent_width: 4
//! pairs:
//!   - { open: "(", close: ")" }
//!   - { open: "[", close: "]" }
//! comment_toggle: "cmd+/"
//! offset_unit: utf16
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::OffsetUnit;
use crate::keymap::{parse_key_string, KeymapError, Keystroke};

/// Width of one indent unit when nothing else is configured
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// One opener→closer entry of the auto-pairing table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
}

impl BracketPair {
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Quotes open and close with the same character
    pub fn is_symmetric(&self) -> bool {
        self.open == self.close
    }
}

/// Per-engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Spaces per indent unit
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Auto-pairing table, checked in order
    #[serde(default = "default_pairs")]
    pub pairs: Vec<BracketPair>,

    /// Key string for the comment toggle
    #[serde(default = "default_comment_toggle")]
    pub comment_toggle: String,

    /// Unit of offsets exchanged with the host
    #[serde(default)]
    pub offset_unit: OffsetUnit,
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

fn default_pairs() -> Vec<BracketPair> {
    vec![
        BracketPair::new('(', ')'),
        BracketPair::new('[', ']'),
        BracketPair::new('{', '}'),
        BracketPair::new('"', '"'),
        BracketPair::new('\'', '\''),
    ]
}

fn default_comment_toggle() -> String {
    "cmd+/".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            pairs: default_pairs(),
            comment_toggle: default_comment_toggle(),
            offset_unit: OffsetUnit::default(),
        }
    }
}

impl EngineConfig {
    /// Load config from the user config directory, or return defaults if
    /// it is missing or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Parse and validate config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: EngineConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check invariants the rules rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 {
            return Err(ConfigError::Invalid(
                "indent_width must be at least 1".to_string(),
            ));
        }

        let mut openers = HashSet::new();
        for pair in &self.pairs {
            if !openers.insert(pair.open) {
                return Err(ConfigError::Invalid(format!(
                    "opener '{}' appears more than once in pairs",
                    pair.open
                )));
            }
            if pair.open == '\n' || pair.close == '\n' {
                return Err(ConfigError::Invalid(
                    "pairs cannot use a newline".to_string(),
                ));
            }
        }

        self.comment_toggle_key()?;
        Ok(())
    }

    /// The parsed comment toggle binding
    pub fn comment_toggle_key(&self) -> Result<Keystroke, ConfigError> {
        parse_key_string(&self.comment_toggle).map_err(ConfigError::Key)
    }

    /// The configured indent unit as a string of spaces
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }

    /// Closer registered for `open`
    pub fn closer_for(&self, open: char) -> Option<char> {
        self.pairs.iter().find(|p| p.open == open).map(|p| p.close)
    }

    /// Whether `c` closes any registered pair
    pub fn is_closer(&self, c: char) -> bool {
        self.pairs.iter().any(|p| p.close == c)
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
    Key(KeymapError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
            ConfigError::Key(e) => write!(f, "Invalid comment_toggle: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Key(e) => Some(e),
            _ => None,
        }
    }
}
