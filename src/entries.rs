//! Entry-level edits inside `experience` and `education` lists.
//!
//! Each function takes the current list and returns a new one, leaving every entry other than
//! the addressed one untouched. Indices out of range are ignored. The caller replaces the
//! containing section's content with the result through [`crate::engine::update_content`].

use crate::ids::IdSource;
use crate::section::{Entry, EntryField};

fn map_entry<E: Entry>(entries: &[E], index: usize, edit: impl FnOnce(&mut E)) -> Vec<E> {
    let mut next = entries.to_vec();
    if let Some(entry) = next.get_mut(index) {
        edit(entry);
    } else {
        tracing::debug!(index, len = entries.len(), "Entry index out of range");
    }
    next
}

/// Appends a blank entry with a fresh id and one empty highlight.
pub fn add_entry<E: Entry>(entries: &[E], ids: &mut dyn IdSource) -> Vec<E> {
    let mut id = ids.next_entry_id();
    while entries.iter().any(|entry| entry.id() == &id) {
        id = ids.next_entry_id();
    }
    let mut next = entries.to_vec();
    next.push(E::blank(id));
    next
}

#[must_use]
/// Sets one text field of the entry at `index`.
pub fn update_field<E: Entry>(entries: &[E], index: usize, field: EntryField, value: String) -> Vec<E> {
    map_entry(entries, index, |entry| *entry.field_mut(field) = value)
}

#[must_use]
/// Sets the `current` flag of the entry at `index`.
///
/// Marking an entry current clears its end date in the same step. Unmarking it leaves the
/// end date as it was.
pub fn set_current<E: Entry>(entries: &[E], index: usize, current: bool) -> Vec<E> {
    map_entry(entries, index, |entry| {
        let base = entry.base_mut();
        base.current = current;
        if current {
            base.end_date.clear();
        }
    })
}

#[must_use]
/// Removes the entry at `index`.
pub fn delete_entry<E: Entry>(entries: &[E], index: usize) -> Vec<E> {
    entries
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, entry)| entry.clone())
        .collect()
}

#[must_use]
/// Appends an empty highlight to the entry at `index`.
pub fn add_highlight<E: Entry>(entries: &[E], index: usize) -> Vec<E> {
    map_entry(entries, index, |entry| entry.base_mut().highlights.push(String::new()))
}

#[must_use]
/// Replaces highlight `highlight` of the entry at `index`.
pub fn update_highlight<E: Entry>(
    entries: &[E],
    index: usize,
    highlight: usize,
    value: String,
) -> Vec<E> {
    map_entry(entries, index, |entry| {
        if let Some(text) = entry.base_mut().highlights.get_mut(highlight) {
            *text = value;
        }
    })
}

#[must_use]
/// Removes highlight `highlight` of the entry at `index`.
pub fn delete_highlight<E: Entry>(entries: &[E], index: usize, highlight: usize) -> Vec<E> {
    map_entry(entries, index, |entry| {
        let highlights = &mut entry.base_mut().highlights;
        if highlight < highlights.len() {
            highlights.remove(highlight);
        }
    })
}

#[cfg(test)]
#[path = "tests/entries.rs"]
mod tests;
