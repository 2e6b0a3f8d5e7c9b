//! Keystroke rules
//!
//! Each rule is a `(predicate, transform)` pair: the predicate looks only at
//! the shape of the key event, the transform looks at the document and either
//! produces the replacement state or declines. Rules are tried in the fixed
//! order of [`RULES`] and the first transform that produces a state wins.

mod backspace;
mod comment;
mod indent;
mod newline;
mod pairing;

use std::fmt;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::editable::DocumentState;
use crate::keymap::Keystroke;
use crate::language::LanguageMode;

/// Everything a rule may read besides the document and the key
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub config: &'a EngineConfig,
    pub language: LanguageMode,
    pub comment_toggle: Keystroke,
}

impl RuleContext<'_> {
    pub fn indent_width(&self) -> usize {
        self.config.indent_width
    }
}

/// Identifies which rule handled a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    PairInsert,
    PairSkip,
    PairDelete,
    Indent,
    Newline,
    BackspaceDedent,
    CommentToggle,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleKind::PairInsert => "pair-insert",
            RuleKind::PairSkip => "pair-skip",
            RuleKind::PairDelete => "pair-delete",
            RuleKind::Indent => "indent",
            RuleKind::Newline => "newline",
            RuleKind::BackspaceDedent => "backspace-dedent",
            RuleKind::CommentToggle => "comment-toggle",
        };
        f.write_str(name)
    }
}

/// Key-shape predicate
pub type KeyPredicate = fn(&Keystroke, &RuleContext<'_>) -> bool;

/// Document transform; `None` declines
pub type Transform = fn(&RuleContext<'_>, &DocumentState, &Keystroke) -> Option<DocumentState>;

/// One entry of the dispatch table
#[derive(Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    pub accepts: KeyPredicate,
    pub apply: Transform,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish()
    }
}

/// Dispatch table in priority order
pub const RULES: [Rule; 7] = [
    Rule {
        kind: RuleKind::PairInsert,
        accepts: pairing::accepts_opener,
        apply: pairing::insert_pair,
    },
    Rule {
        kind: RuleKind::PairSkip,
        accepts: pairing::accepts_closer,
        apply: pairing::skip_closer,
    },
    Rule {
        kind: RuleKind::PairDelete,
        accepts: pairing::accepts_backspace,
        apply: pairing::delete_pair,
    },
    Rule {
        kind: RuleKind::Indent,
        accepts: indent::accepts,
        apply: indent::apply,
    },
    Rule {
        kind: RuleKind::Newline,
        accepts: newline::accepts,
        apply: newline::apply,
    },
    Rule {
        kind: RuleKind::BackspaceDedent,
        accepts: backspace::accepts,
        apply: backspace::apply,
    },
    Rule {
        kind: RuleKind::CommentToggle,
        accepts: comment::accepts,
        apply: comment::apply,
    },
];

/// Run the rule chain, short-circuiting on the first match
pub fn dispatch(
    ctx: &RuleContext<'_>,
    state: &DocumentState,
    key: &Keystroke,
) -> Option<(RuleKind, DocumentState)> {
    RULES
        .iter()
        .filter(|rule| (rule.accepts)(key, ctx))
        .find_map(|rule| (rule.apply)(ctx, state, key).map(|next| (rule.kind, next)))
}
