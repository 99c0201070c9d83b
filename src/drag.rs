//! Drag-reorder controller turning pointer-level drag events into reorder mutations.
//!
//! Reordering is live: every hover over another section produces a reordered collection, so the
//! document visibly rearranges while the drag is still in progress. Dropping applies nothing new.

use crate::engine;
use crate::section::{Section, SectionId};

#[derive(Clone, PartialEq, Eq, Debug, Default)]
/// Lifecycle of a drag gesture.
///
/// ```text
/// Idle -> Dragging(id) -> Idle
///             |   ^
///             v   |
///     hovering over target (evaluated per event)
/// ```
///
/// Hovering is not stored: each hover event is evaluated against the current collection and
/// the controller stays in `Dragging`.
pub enum DragState {
    #[default]
    /// No gesture in progress.
    Idle,
    /// The section with this id is being dragged.
    Dragging(SectionId),
}

#[derive(Debug, Default)]
/// Tracks the in-flight drag and computes reorders on hover.
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    /// Controller in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Current state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    /// Id of the section being dragged, if any.
    pub fn dragged(&self) -> Option<&SectionId> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// Begins dragging `id`, replacing any gesture already in progress.
    pub fn start(&mut self, id: SectionId) {
        tracing::debug!(%id, "Drag started");
        self.state = DragState::Dragging(id);
    }

    #[must_use]
    /// Evaluates a hover over `target`.
    ///
    /// Returns the reordered collection, or `None` when idle, hovering the dragged section
    /// itself, or when either id is no longer present (for instance the dragged section was
    /// deleted mid-drag).
    pub fn over(&self, sections: &[Section], target: &SectionId) -> Option<Vec<Section>> {
        let dragged = self.dragged()?;
        let reordered = engine::move_section(sections, dragged, target);
        if reordered.is_none() && dragged != target {
            tracing::debug!(%dragged, %target, "Ignoring hover with stale section id");
        }
        reordered
    }

    /// Ends the gesture wherever the pointer was released.
    pub fn end(&mut self) {
        if let DragState::Dragging(id) = &self.state {
            tracing::debug!(%id, "Drag ended");
        }
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
#[path = "tests/drag.rs"]
mod tests;
