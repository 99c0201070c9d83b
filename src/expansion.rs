//! Which single section is open for editing.

use crate::section::SectionId;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// At most one expanded section at a time.
pub struct Expansion {
    expanded: Option<SectionId>,
}

impl Expansion {
    #[must_use]
    /// Nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// The expanded section, if any.
    pub fn expanded(&self) -> Option<&SectionId> {
        self.expanded.as_ref()
    }

    #[must_use]
    /// Whether `id` is the expanded section.
    pub fn is_expanded(&self, id: &SectionId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Handles a click on `id`'s expand control.
    ///
    /// Collapses `id` if it is already open, otherwise opens it and implicitly collapses
    /// whichever section was open before.
    pub fn toggle(&mut self, id: &SectionId) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
    }

    /// Opens `id`, collapsing any other section.
    pub fn expand(&mut self, id: SectionId) {
        self.expanded = Some(id);
    }

    /// Clears the expansion if `id` was the expanded section.
    pub fn forget(&mut self, id: &SectionId) {
        if self.is_expanded(id) {
            self.expanded = None;
        }
    }
}

#[cfg(test)]
#[path = "tests/expansion.rs"]
mod tests;
