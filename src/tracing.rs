//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging rule
//! dispatch and state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=codepad::engine=trace` - every key event, including declined ones
//! - `RUST_LOG=codepad::host=debug` - surface commits and caret placement
//!
//! # Log Files
//!
//! Logs are written to `~/.config/codepad/logs/codepad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::DocumentState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// File logging writes to
/// `~/.config/codepad/logs/codepad.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "codepad.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of document state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub len_chars: usize,
    pub selection: (usize, usize),
}

impl StateSnapshot {
    pub fn from_state(state: &DocumentState) -> Self {
        let sel = state.selection();
        Self {
            len_chars: state.buffer().len_chars(),
            selection: (sel.start, sel.end),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.len_chars != other.len_chars {
            changes.push(format!("len: {} → {}", self.len_chars, other.len_chars));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection: ({},{}) → ({},{})",
                self.selection.0, self.selection.1, other.selection.0, other.selection.1
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::SelectionRange;

    #[test]
    fn test_snapshot_diff() {
        let before = DocumentState::new("abc").select(SelectionRange::caret(3));
        let after = before.insert_text("()");
        let diff = StateSnapshot::from_state(&before)
            .diff(&StateSnapshot::from_state(&after))
            .unwrap();
        assert_eq!(diff, "len: 3 → 5; selection: (3,3) → (5,5)");
    }

    #[test]
    fn test_snapshot_no_change() {
        let state = DocumentState::new("abc");
        let snap = StateSnapshot::from_state(&state);
        assert!(snap.diff(&snap).is_none());
    }
}
