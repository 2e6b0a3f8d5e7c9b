//! The keystroke-to-edit engine
//!
//! An [`Engine`] owns one document state and turns key events into new
//! states through the rule chain in [`crate::rules`]. It performs no I/O;
//! applying the result to a rendering surface is the host's job (see
//! [`crate::host`]).

use serde::Serialize;

use crate::config::{ConfigError, EngineConfig};
use crate::editable::{DocumentState, SelectionRange, TextBuffer};
use crate::keymap::{Keystroke, Modifiers};
use crate::language::LanguageMode;
use crate::rules::{self, RuleContext, RuleKind};
use crate::tracing::StateSnapshot;

/// Binding used when no config is supplied; the parsed form of `"cmd+/"`
const DEFAULT_COMMENT_TOGGLE: Keystroke = Keystroke::char_with_mods('/', Modifiers::META);

/// Result of one `handle` call, in host offset units
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    pub text: String,
    pub selection: SelectionRange,
    /// When false the host applies its own default behaviour for the key
    pub handled: bool,
    /// Rule that produced the edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleKind>,
}

/// Keystroke-to-edit engine for one editable surface
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    comment_toggle: Keystroke,
    language: LanguageMode,
    state: DocumentState,
}

impl Engine {
    /// Create an engine with the default configuration
    pub fn new(initial_text: &str, language: LanguageMode) -> Self {
        Self {
            config: EngineConfig::default(),
            comment_toggle: DEFAULT_COMMENT_TOGGLE,
            language,
            state: DocumentState::new(initial_text),
        }
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(
        initial_text: &str,
        language: LanguageMode,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let comment_toggle = config.comment_toggle_key()?;
        Ok(Self {
            config,
            comment_toggle,
            language,
            state: DocumentState::new(initial_text),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn language(&self) -> LanguageMode {
        self.language
    }

    pub fn set_language(&mut self, language: LanguageMode) {
        self.language = language;
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    /// Replace the engine's document state wholesale
    pub fn set_state(&mut self, state: DocumentState) {
        self.state = state;
    }

    /// Get the text content as a String
    pub fn text(&self) -> String {
        self.state.text()
    }

    /// Current selection in char offsets
    pub fn selection(&self) -> SelectionRange {
        self.state.selection()
    }

    /// Current selection in the host's offset unit
    pub fn host_selection(&self) -> SelectionRange {
        self.config
            .offset_unit
            .from_chars(self.state.buffer(), self.state.selection())
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext {
            config: &self.config,
            language: self.language,
            comment_toggle: self.comment_toggle,
        }
    }

    /// Process one key event against the host's current text and selection.
    ///
    /// The host is the source of truth for what the user sees, so its values
    /// replace the engine's state before the rules run. Selection offsets are
    /// in the configured [`crate::editable::OffsetUnit`].
    pub fn handle(
        &mut self,
        current_text: &str,
        current_selection: SelectionRange,
        key: &Keystroke,
    ) -> EditOutcome {
        let buffer = if self.state.buffer().matches_text(current_text) {
            self.state.buffer().clone()
        } else {
            TextBuffer::from_text(current_text)
        };
        let selection = self.config.offset_unit.to_chars(&buffer, current_selection);
        self.state = DocumentState::with_selection(buffer, selection);

        let rule = self.key_down(key);
        EditOutcome {
            text: self.text(),
            selection: self.host_selection(),
            handled: rule.is_some(),
            rule,
        }
    }

    /// Run the rule chain against the engine's own state.
    ///
    /// Commits and returns the matching rule, or `None` when the event
    /// falls through to the host's default behaviour.
    pub fn key_down(&mut self, key: &Keystroke) -> Option<RuleKind> {
        let Some((kind, next)) = rules::dispatch(&self.context(), &self.state, key) else {
            tracing::trace!(key = %key, "No rule matched");
            return None;
        };

        let before = StateSnapshot::from_state(&self.state);
        let after = StateSnapshot::from_state(&next);
        tracing::debug!(
            rule = %kind,
            key = %key,
            language = %self.language,
            "Rule applied: {}",
            before.diff(&after).unwrap_or_else(|| "no change".to_string())
        );

        self.state = next;
        Some(kind)
    }
}
