//! Repaint flag sink
//!
//! The interactive grid holds a clone and redraws when the flag is raised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::{TreeEvent, TreeEventSink};
use crate::domain::tree::TalentTree;

/// Raised on every tree event, cleared by the renderer
#[derive(Debug, Clone, Default)]
pub struct RepaintFlag {
    dirty: Arc<AtomicBool>,
}

impl RepaintFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return whether a repaint is pending and clear the flag.
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn is_raised(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }
}

impl TreeEventSink for RepaintFlag {
    fn on_event(&self, event: &TreeEvent<'_>, _tree: &TalentTree) {
        tracing::trace!(step = %event.command(), "repaint requested");
        self.dirty.store(true, Ordering::Release);
    }
}
