//! Identifier generation for new sections and entries.
//!
//! Ids are derived from wall-clock milliseconds, as in `experience-1718000000000`. A single
//! generator never hands out the same stamp twice: when the clock has not advanced (or stepped
//! backwards) since the last id, the previous stamp is bumped by one.

use crate::section::{EntryId, SectionId, SectionKind};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh section and entry identifiers.
pub trait IdSource {
    /// Identifier for a new section of `kind`.
    fn next_section_id(&mut self, kind: SectionKind) -> SectionId;
    /// Identifier for a new experience or education entry.
    fn next_entry_id(&mut self) -> EntryId;
}

#[derive(Debug, Default)]
/// Time-based ids that stay strictly increasing within one generator.
pub struct ClockIds {
    last: u128,
}

impl ClockIds {
    #[must_use]
    /// Creates a generator with no stamps issued yet.
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(&mut self) -> u128 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis());
        self.last = now.max(self.last + 1);
        self.last
    }
}

impl IdSource for ClockIds {
    fn next_section_id(&mut self, kind: SectionKind) -> SectionId {
        SectionId::new(format!("{kind}-{}", self.stamp()))
    }

    fn next_entry_id(&mut self) -> EntryId {
        EntryId::new(self.stamp().to_string())
    }
}

#[derive(Debug, Default)]
/// Deterministic counter ids, for hosts that replay input and for tests.
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    #[must_use]
    /// Counter starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

impl IdSource for SequentialIds {
    fn next_section_id(&mut self, kind: SectionKind) -> SectionId {
        SectionId::new(format!("{kind}-{}", self.bump()))
    }

    fn next_entry_id(&mut self) -> EntryId {
        EntryId::new(self.bump().to_string())
    }
}

#[cfg(test)]
#[path = "tests/ids.rs"]
mod tests;
