//! Host adapter between the engine and an editable rendering surface.
//!
//! The engine never touches a surface. `HostAdapter` reads the surface's
//! text and selection, runs the engine, writes the new text back and queues
//! the selection. Caret placement is applied later by [`HostAdapter::flush_selection`];
//! if the surface has gone away by then the placement is dropped and the
//! engine state is left alone.

use crate::editable::SelectionRange;
use crate::engine::{EditOutcome, Engine};
use crate::keymap::{KeyCode, Keystroke};

/// Errors reported by a rendering surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The surface is no longer attached to anything
    Unmounted,
    Rejected(String),
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::Unmounted => write!(f, "surface is unmounted"),
            SurfaceError::Rejected(reason) => write!(f, "surface rejected update: {}", reason),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// An editable surface as seen by the host adapter.
///
/// Offsets are in whatever unit the engine's config declares.
pub trait Surface {
    fn text(&self) -> String;
    fn selection(&self) -> SelectionRange;
    fn set_text(&mut self, text: &str) -> Result<(), SurfaceError>;
    fn set_selection(&mut self, selection: SelectionRange) -> Result<(), SurfaceError>;
}

/// In-memory surface, used by the driver binary and tests
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    text: String,
    selection: SelectionRange,
    mounted: bool,
}

impl MemorySurface {
    pub fn new(text: &str, selection: SelectionRange) -> Self {
        Self {
            text: text.to_string(),
            selection,
            mounted: true,
        }
    }

    /// Detach the surface; later writes fail with [`SurfaceError::Unmounted`]
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Surface for MemorySurface {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn set_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        if !self.mounted {
            return Err(SurfaceError::Unmounted);
        }
        self.text = text.to_string();
        Ok(())
    }

    fn set_selection(&mut self, selection: SelectionRange) -> Result<(), SurfaceError> {
        if !self.mounted {
            return Err(SurfaceError::Unmounted);
        }
        self.selection = selection;
        Ok(())
    }
}

/// Drives an [`Engine`] from a [`Surface`]'s key events
#[derive(Debug)]
pub struct HostAdapter<S: Surface> {
    engine: Engine,
    surface: S,
    pending_selection: Option<SelectionRange>,
}

impl<S: Surface> HostAdapter<S> {
    pub fn new(engine: Engine, surface: S) -> Self {
        Self {
            engine,
            surface,
            pending_selection: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Selection waiting for the next [`HostAdapter::flush_selection`]
    pub fn pending_selection(&self) -> Option<SelectionRange> {
        self.pending_selection
    }

    pub fn into_parts(self) -> (Engine, S) {
        (self.engine, self.surface)
    }

    /// Handle one key event.
    ///
    /// Rule-handled events replace the surface text. Anything else gets a
    /// plain text area's default behaviour: typed characters are inserted,
    /// backspace deletes one character or the selection, other keys do
    /// nothing. The returned outcome's `handled` flag says whether a rule
    /// took the event.
    pub fn key_down(&mut self, key: &Keystroke) -> Result<EditOutcome, SurfaceError> {
        let text = self.surface.text();
        let selection = self.surface.selection();
        let outcome = self.engine.handle(&text, selection, key);

        if outcome.handled {
            self.commit(&outcome.text, outcome.selection)?;
            return Ok(outcome);
        }

        let state = self.engine.state();
        let fallback = if let Some(c) = key.typed_char() {
            Some(state.insert_text(&c.to_string()))
        } else if key.is_plain(KeyCode::Backspace) {
            state.delete_backward()
        } else {
            None
        };

        let Some(next) = fallback else {
            tracing::trace!(key = %key, "Key ignored by host");
            return Ok(outcome);
        };

        self.engine.set_state(next);
        let outcome = EditOutcome {
            text: self.engine.text(),
            selection: self.engine.host_selection(),
            handled: false,
            rule: None,
        };
        self.commit(&outcome.text, outcome.selection)?;
        Ok(outcome)
    }

    fn commit(&mut self, text: &str, selection: SelectionRange) -> Result<(), SurfaceError> {
        self.surface.set_text(text)?;
        self.pending_selection = Some(selection);
        Ok(())
    }

    /// Apply the queued selection to the surface.
    ///
    /// Returns whether a selection was placed. A surface failure is logged
    /// and the selection dropped; engine state is never touched here.
    pub fn flush_selection(&mut self) -> bool {
        let Some(selection) = self.pending_selection.take() else {
            return false;
        };
        match self.surface.set_selection(selection) {
            Ok(()) => {
                tracing::debug!(
                    start = selection.start,
                    end = selection.end,
                    "Caret placed"
                );
                true
            }
            Err(e) => {
                tracing::warn!("Dropping caret placement: {}", e);
                false
            }
        }
    }
}
