//! The section editor ties the engine, drag controller, expansion state and dispatcher together.
//!
//! The owning application keeps the canonical collection. It lends it to the editor for the
//! duration of one interaction together with an `on_update` callback, and the editor hands the
//! complete new collection straight back through that callback. Across calls the editor only
//! remembers which section is expanded and which one is being dragged.

use crate::dispatch::{self, Control, Input};
use crate::drag::DragController;
use crate::engine;
use crate::expansion::Expansion;
use crate::ids::{ClockIds, IdSource};
use crate::section::{Section, SectionContent, SectionId, SectionKind};

/// Receives assist requests for a summary section.
///
/// Invoked fire-and-forget: the editor neither waits for nor inspects any outcome.
pub trait AssistHook {
    /// Called when the user asks for help writing section `section`.
    fn request_assist(&self, section: &SectionId);
}

impl<F: Fn(&SectionId)> AssistHook for F {
    fn request_assist(&self, section: &SectionId) {
        self(section);
    }
}

/// Interaction state around a caller-owned section collection.
pub struct SectionEditor<I = ClockIds> {
    expansion: Expansion,
    drag: DragController,
    ids: I,
    assist: Option<Box<dyn AssistHook>>,
    renumber_on_delete: bool,
}

impl Default for SectionEditor<ClockIds> {
    fn default() -> Self {
        Self::new(ClockIds::new())
    }
}

impl<I: IdSource> SectionEditor<I> {
    #[must_use]
    /// Editor drawing fresh ids from `ids`, with nothing expanded or dragged.
    pub fn new(ids: I) -> Self {
        Self {
            expansion: Expansion::new(),
            drag: DragController::new(),
            ids,
            assist: None,
            renumber_on_delete: false,
        }
    }

    #[must_use]
    /// Installs the hook behind the summary's assist control.
    pub fn with_assist(mut self, hook: impl AssistHook + 'static) -> Self {
        self.assist = Some(Box::new(hook));
        self
    }

    #[must_use]
    /// Whether deleting a section also renumbers the remaining ones.
    ///
    /// Off by default: a plain delete keeps the surviving ranks exactly as they were.
    pub fn renumber_on_delete(mut self, renumber: bool) -> Self {
        self.renumber_on_delete = renumber;
        self
    }

    #[must_use]
    /// Section currently open for editing.
    pub fn expanded(&self) -> Option<&SectionId> {
        self.expansion.expanded()
    }

    #[must_use]
    /// Whether `id` is open for editing.
    pub fn is_expanded(&self, id: &SectionId) -> bool {
        self.expansion.is_expanded(id)
    }

    #[must_use]
    /// Section being dragged.
    pub fn dragging(&self) -> Option<&SectionId> {
        self.drag.dragged()
    }

    /// Replaces the content of section `id`.
    pub fn change_content(
        &self,
        sections: &[Section],
        id: &SectionId,
        content: SectionContent,
        on_update: impl FnOnce(Vec<Section>),
    ) {
        on_update(engine::update_content(sections, id, content));
    }

    /// Appends a section of `kind`, expands it, and returns its id.
    pub fn add_section(
        &mut self,
        sections: &[Section],
        kind: SectionKind,
        on_update: impl FnOnce(Vec<Section>),
    ) -> SectionId {
        let (next, id) = engine::add_section(sections, kind, &mut self.ids);
        on_update(next);
        self.expansion.expand(id.clone());
        id
    }

    /// Removes section `id`, collapsing it first if it was expanded.
    pub fn delete_section(
        &mut self,
        sections: &[Section],
        id: &SectionId,
        on_update: impl FnOnce(Vec<Section>),
    ) {
        let mut next = engine::delete_section(sections, id);
        if self.renumber_on_delete {
            next = engine::normalize_order(&next);
        }
        on_update(next);
        self.expansion.forget(id);
    }

    /// Changes the display title of section `id`.
    pub fn rename_section(
        &self,
        sections: &[Section],
        id: &SectionId,
        title: String,
        on_update: impl FnOnce(Vec<Section>),
    ) {
        on_update(engine::rename_section(sections, id, title));
    }

    /// Shows or hides section `id`.
    pub fn set_visibility(
        &self,
        sections: &[Section],
        id: &SectionId,
        visible: bool,
        on_update: impl FnOnce(Vec<Section>),
    ) {
        on_update(engine::set_visibility(sections, id, visible));
    }

    /// Handles a click on the expand control of section `id`.
    pub fn toggle_expanded(&mut self, id: &SectionId) {
        self.expansion.toggle(id);
    }

    /// Starts dragging section `id` by its handle.
    pub fn drag_start(&mut self, id: SectionId) {
        self.drag.start(id);
    }

    /// Handles the dragged section passing over `target`.
    ///
    /// Notifies and returns `true` only when the collection was actually reordered.
    pub fn drag_over(
        &self,
        sections: &[Section],
        target: &SectionId,
        on_update: impl FnOnce(Vec<Section>),
    ) -> bool {
        match self.drag.over(sections, target) {
            Some(next) => {
                on_update(next);
                true
            }
            None => false,
        }
    }

    /// Releases the drag wherever it ended.
    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    /// Forwards an assist request for section `id` to the hook, if one is installed.
    pub fn request_assist(&self, id: &SectionId) {
        match &self.assist {
            Some(hook) => hook.request_assist(id),
            None => tracing::debug!(%id, "Assist requested but no hook is installed"),
        }
    }

    /// Delivers `input` to `control` of section `id`.
    ///
    /// Assist presses go to the hook without touching the collection. Every other control
    /// that accepts the input produces exactly one notification carrying the whole collection.
    pub fn trigger(
        &mut self,
        sections: &[Section],
        id: &SectionId,
        control: Control,
        input: Input,
        on_update: impl FnOnce(Vec<Section>),
    ) {
        let Some(section) = sections.iter().find(|section| &section.id == id) else {
            tracing::debug!(%id, ?control, "Control triggered on a missing section");
            return;
        };
        if control == Control::Assist {
            if section.kind() == Some(SectionKind::Summary) && input == Input::Press {
                self.request_assist(id);
            }
            return;
        }
        match dispatch::apply(&section.content, control, input, &mut self.ids) {
            Some(content) => on_update(engine::update_content(sections, id, content)),
            None => tracing::debug!(%id, ?control, "Control rejected input"),
        }
    }
}

#[cfg(test)]
#[path = "tests/editor.rs"]
mod tests;
