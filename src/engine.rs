//! The mutation engine computes a new section collection from the current one and an operation.
//!
//! Nothing here mutates its input. Every operation borrows the caller's collection and returns a
//! freshly allocated one, so the owner of the canonical copy stays its only writer. Operations
//! addressed to an id that is not present are no-ops that return an equal collection.
//!
//! Add and move re-normalise `order` to array position. Delete deliberately does not; callers
//! wanting contiguous ranks after a delete follow it with [`normalize_order`].

use crate::ids::IdSource;
use crate::section::{Section, SectionContent, SectionId, SectionKind};

#[derive(Clone, Debug, PartialEq)]
/// One whole-collection operation.
pub enum Mutation {
    /// Replace a section's content.
    UpdateContent {
        /// Target section.
        id: SectionId,
        /// Replacement payload.
        content: SectionContent,
    },
    /// Append a new section with default content.
    AddSection(SectionKind),
    /// Remove a section.
    DeleteSection(SectionId),
    /// Move `dragged` into the array position currently held by `target`.
    MoveSection {
        /// Section being moved.
        dragged: SectionId,
        /// Section whose position it takes.
        target: SectionId,
    },
    /// Change a section's display title.
    Rename {
        /// Target section.
        id: SectionId,
        /// New title.
        title: String,
    },
    /// Show or hide a section.
    SetVisibility {
        /// Target section.
        id: SectionId,
        /// New display flag.
        visible: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
/// Result of [`apply`].
pub struct Applied {
    /// The complete new collection.
    pub sections: Vec<Section>,
    /// Id generated by [`Mutation::AddSection`].
    pub created: Option<SectionId>,
}

/// Applies any [`Mutation`], returning the complete new collection.
///
/// A move that would be a no-op (self-move or unknown ids) returns the input unchanged.
pub fn apply(sections: &[Section], mutation: Mutation, ids: &mut dyn IdSource) -> Applied {
    let mut created = None;
    let sections = match mutation {
        Mutation::UpdateContent { id, content } => update_content(sections, &id, content),
        Mutation::AddSection(kind) => {
            let (next, id) = add_section(sections, kind, ids);
            created = Some(id);
            next
        }
        Mutation::DeleteSection(id) => delete_section(sections, &id),
        Mutation::MoveSection { dragged, target } => {
            move_section(sections, &dragged, &target).unwrap_or_else(|| sections.to_vec())
        }
        Mutation::Rename { id, title } => rename_section(sections, &id, title),
        Mutation::SetVisibility { id, visible } => set_visibility(sections, &id, visible),
    };
    Applied { sections, created }
}

fn map_section(
    sections: &[Section],
    id: &SectionId,
    edit: impl FnOnce(&mut Section),
) -> Vec<Section> {
    let mut next = sections.to_vec();
    match next.iter_mut().find(|section| &section.id == id) {
        Some(section) => edit(section),
        None => tracing::debug!(%id, "No section with this id, leaving collection unchanged"),
    }
    next
}

#[must_use]
/// Replaces the content of the section with `id`.
pub fn update_content(sections: &[Section], id: &SectionId, content: SectionContent) -> Vec<Section> {
    map_section(sections, id, |section| section.content = content)
}

#[must_use]
/// Replaces the title of the section with `id`.
pub fn rename_section(sections: &[Section], id: &SectionId, title: String) -> Vec<Section> {
    map_section(sections, id, |section| section.title = title)
}

#[must_use]
/// Sets the display flag of the section with `id`.
pub fn set_visibility(sections: &[Section], id: &SectionId, visible: bool) -> Vec<Section> {
    map_section(sections, id, |section| section.is_visible = visible)
}

/// Appends a new section of `kind` and returns the collection with the new section's id.
///
/// Existing sections are renumbered to their array position first, so the new section's
/// `order` (the collection length) never collides with a rank left behind by a delete.
pub fn add_section(
    sections: &[Section],
    kind: SectionKind,
    ids: &mut dyn IdSource,
) -> (Vec<Section>, SectionId) {
    let mut id = ids.next_section_id(kind);
    while sections.iter().any(|section| section.id == id) {
        id = ids.next_section_id(kind);
    }
    let mut next = normalize_order(sections);
    next.push(Section::new(id.clone(), kind, next.len()));
    tracing::debug!(%id, %kind, "Added section");
    (next, id)
}

#[must_use]
/// Removes the section with `id` without renumbering the rest.
pub fn delete_section(sections: &[Section], id: &SectionId) -> Vec<Section> {
    sections
        .iter()
        .filter(|section| &section.id != id)
        .cloned()
        .collect()
}

#[must_use]
/// Reassigns every `order` to the section's array index.
pub fn normalize_order(sections: &[Section]) -> Vec<Section> {
    let mut next = sections.to_vec();
    renumber(&mut next);
    next
}

fn renumber(sections: &mut [Section]) {
    for (index, section) in sections.iter_mut().enumerate() {
        section.order = index;
    }
}

#[must_use]
/// Splices `dragged` into the array position held by `target` and renumbers everything.
///
/// Returns `None` when the ids are equal or either is absent from `sections`.
pub fn move_section(
    sections: &[Section],
    dragged: &SectionId,
    target: &SectionId,
) -> Option<Vec<Section>> {
    if dragged == target {
        return None;
    }
    let from = sections.iter().position(|section| &section.id == dragged)?;
    let to = sections.iter().position(|section| &section.id == target)?;

    let mut next = sections.to_vec();
    let moving = next.remove(from);
    next.insert(to, moving);
    renumber(&mut next);
    Some(next)
}

#[must_use]
/// Sections ranked by `order`, ties kept in array order.
pub fn sorted_by_order(sections: &[Section]) -> Vec<&Section> {
    let mut ranked: Vec<&Section> = sections.iter().collect();
    ranked.sort_by_key(|section| section.order);
    ranked
}

#[must_use]
/// Whether the ranks of `sections`, once sorted, are exactly `0..len` with no gaps or repeats.
pub fn is_contiguous(sections: &[Section]) -> bool {
    sorted_by_order(sections)
        .iter()
        .enumerate()
        .all(|(index, section)| section.order == index)
}

#[cfg(test)]
#[path = "tests/engine.rs"]
mod tests;
