//! Command-line argument parsing for the driver binary
//!
//! The driver replays a key script against a file (or stdin) and prints the
//! resulting buffer. Useful for poking at the rules without a browser.

use clap::Parser;
use std::path::PathBuf;

use crate::editable::SelectionRange;
use crate::keymap::{parse_key_string, Keystroke};
use crate::language::LanguageMode;

/// Replay keystrokes through the code-editing engine
#[derive(Parser, Debug)]
#[command(
    name = "codepad",
    version,
    about = "Replay keystrokes through the code-editing engine"
)]
pub struct CliArgs {
    /// File to edit (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Language mode (python, cpp, javascript, rust, plain); detected from the file extension by default
    #[arg(short, long)]
    pub language: Option<String>,

    /// Caret offset, or selection start when --select-end is given
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub caret: usize,

    /// Selection end offset
    #[arg(long, value_name = "N")]
    pub select_end: Option<usize>,

    /// Comma-separated key script, e.g. "tab,enter,cmd+/"
    #[arg(short, long, default_value = "")]
    pub keys: String,

    /// Config file (defaults to the user config)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: Option<PathBuf>,
    pub language: LanguageMode,
    pub selection: SelectionRange,
    pub keys: Vec<Keystroke>,
    pub config_path: Option<PathBuf>,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let language = match (&self.language, &self.path) {
            (Some(name), _) => name.parse()?,
            (None, Some(path)) => LanguageMode::from_path(path),
            (None, None) => LanguageMode::default(),
        };

        let selection = match self.select_end {
            Some(end) => SelectionRange::new(self.caret, end),
            None => SelectionRange::caret(self.caret),
        };

        Ok(RunConfig {
            input: self.path,
            language,
            selection,
            keys: parse_key_script(&self.keys)?,
            config_path: self.config,
            json: self.json,
        })
    }
}

/// Parse a comma-separated key script. Blank entries are skipped; a literal
/// comma is spelled `comma`.
pub fn parse_key_script(script: &str) -> Result<Vec<Keystroke>, String> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_key_string(s).map_err(|e| format!("Bad key '{}': {}", s, e)))
        .collect()
}
