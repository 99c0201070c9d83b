//! The terminal host: owns the canonical resume and drives the section editor from key presses.
//!
//! The host is the single writer of the section collection. Each interaction lends the current
//! collection to the [`SectionEditor`] and stores whatever collection comes back through the
//! update callback. The cursor is tracked as a position in display order (ranked by `order`), so
//! it is re-derived from the selected section's id whenever the collection is reordered.
//!
//! Reordering splices by array position, so the collection is sorted by `order` once on arrival.
//! Every later mutation keeps array position and rank in step.

use crate::config::Config;
use crate::dispatch::{self, Control, ControlValue, ControlView, Input};
use crate::editor::SectionEditor;
use crate::engine;
use crate::ids::ClockIds;
use crate::section::{Section, SectionId, SectionKind};
use crate::session::Session;
use edtui::{EditorState, Lines};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Ranked section list; the expanded section shows its controls inline.
    List,
    /// Cursor moves between the controls of the expanded section.
    Fields,
    /// Vim-like editor bound to one text control or a section title.
    Edit,
}

#[derive(PartialEq, Eq, Debug, Clone)]
/// What the text editor writes to on every keystroke.
pub enum EditTarget {
    /// A section's display title.
    Title(SectionId),
    /// A text control of a section.
    Control {
        /// Section owning the control.
        section: SectionId,
        /// The text control.
        control: Control,
    },
}

/// Bridges the section collection and the interactive editor, maintaining session state.
pub struct AppState {
    /// Canonical section collection.
    pub sections: Vec<Section>,
    /// Expansion, drag and dispatch state.
    pub editor: SectionEditor,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Selected section as a position in display order.
    pub current_section_index: usize,
    /// Selected control of the expanded section.
    pub current_control_index: usize,
    /// Editor buffer content when the edit view is active.
    pub editor_state: Option<EditorState>,
    /// Where the editor buffer is written.
    pub edit_target: Option<EditTarget>,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Maximum line width for text wrapping in the editor.
    pub wrap_width: usize,
    /// Section kinds bound to the number keys.
    pub add_kinds: Vec<SectionKind>,
    /// Identity shown in the title bar.
    pub session: Session,
}

impl AppState {
    #[must_use]
    /// Initialises application state around an initial collection.
    pub fn new(mut sections: Vec<Section>, cfg: &Config) -> Self {
        sections.sort_by_key(|section| section.order);
        let editor = SectionEditor::new(ClockIds::new())
            .renumber_on_delete(cfg.renumber_on_delete)
            .with_assist(|id: &SectionId| {
                tracing::info!(section = %id, "Assist requested");
            });

        Self {
            sections,
            editor,
            current_view: View::List,
            current_section_index: 0,
            current_control_index: 0,
            editor_state: None,
            edit_target: None,
            message: None,
            wrap_width: cfg.wrap_width,
            add_kinds: cfg.add_kinds(),
            session: Session::demo(),
        }
    }

    fn with_editor<R>(
        &mut self,
        op: impl FnOnce(&mut SectionEditor, &[Section], &mut dyn FnMut(Vec<Section>)) -> R,
    ) -> R {
        let mut updated = None;
        let result = op(&mut self.editor, &self.sections, &mut |next| updated = Some(next));
        if let Some(next) = updated {
            self.sections = next;
        }
        result
    }

    #[must_use]
    /// Sections ranked by `order`.
    pub fn display_order(&self) -> Vec<&Section> {
        engine::sorted_by_order(&self.sections)
    }

    #[must_use]
    /// The section under the cursor.
    pub fn current_section(&self) -> Option<&Section> {
        self.display_order().get(self.current_section_index).copied()
    }

    fn current_id(&self) -> Option<SectionId> {
        self.current_section().map(|section| section.id.clone())
    }

    #[must_use]
    /// Title of the section the editor buffer writes to, with the control label if any.
    pub fn edit_breadcrumb(&self) -> Option<String> {
        let (id, control) = match self.edit_target.as_ref()? {
            EditTarget::Title(id) => (id, None),
            EditTarget::Control { section, control } => (section, Some(*control)),
        };
        let section = self.sections.iter().find(|section| &section.id == id)?;
        let label = control.and_then(|control| {
            dispatch::controls(section)
                .into_iter()
                .find(|view| view.control == control)
                .map(|view| view.label)
        });
        Some(match label {
            Some(label) => format!("{} > {label}", section.title),
            None => section.title.clone(),
        })
    }

    fn expanded_section(&self) -> Option<&Section> {
        let id = self.editor.expanded()?;
        self.sections.iter().find(|section| &section.id == id)
    }

    /// Moves the cursor onto section `id`.
    pub fn select(&mut self, id: &SectionId) {
        if let Some(position) = self.display_order().iter().position(|s| &s.id == id) {
            self.current_section_index = position;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.sections.len();
        self.current_section_index = self.current_section_index.min(len.saturating_sub(1));
    }

    /// Cursor to the next section.
    pub fn select_next(&mut self) {
        if self.current_section_index + 1 < self.sections.len() {
            self.current_section_index += 1;
        }
    }

    /// Cursor to the previous section.
    pub fn select_prev(&mut self) {
        self.current_section_index = self.current_section_index.saturating_sub(1);
    }

    /// Opens or collapses the section under the cursor.
    pub fn toggle_current(&mut self) {
        if let Some(id) = self.current_id() {
            self.editor.toggle_expanded(&id);
            self.current_control_index = 0;
        }
    }

    /// Adds a section of the kind bound to number key `slot` (zero-based) and selects it.
    pub fn add_section(&mut self, slot: usize) {
        let Some(&kind) = self.add_kinds.get(slot) else {
            return;
        };
        let id = self.with_editor(|editor, sections, notify| {
            editor.add_section(sections, kind, notify)
        });
        self.select(&id);
        self.current_control_index = 0;
        self.message = Some(format!("Added {} section", kind.label()));
    }

    /// Deletes the section under the cursor.
    pub fn delete_current(&mut self) {
        let Some(id) = self.current_id() else {
            return;
        };
        self.with_editor(|editor, sections, notify| editor.delete_section(sections, &id, notify));
        self.clamp_cursor();
        self.message = Some("Section deleted".to_string());
    }

    /// Shows or hides the section under the cursor.
    pub fn toggle_visibility(&mut self) {
        let Some(section) = self.current_section() else {
            return;
        };
        let (id, visible) = (section.id.clone(), !section.is_visible);
        self.with_editor(|editor, sections, notify| {
            editor.set_visibility(sections, &id, visible, notify);
        });
    }

    /// Drags the section under the cursor over its neighbour `offset` places away.
    ///
    /// The first call picks the section up; each call hovers it over one neighbour, which
    /// reorders the collection immediately. The cursor follows the dragged section.
    pub fn drag_by(&mut self, offset: isize) {
        let Some(dragged) = self.editor.dragging().cloned().or_else(|| self.current_id()) else {
            return;
        };
        if self.editor.dragging().is_none() {
            self.editor.drag_start(dragged.clone());
        }
        let order = self.display_order();
        let Some(position) = order.iter().position(|s| s.id == dragged) else {
            return;
        };
        let Some(target) = position
            .checked_add_signed(offset)
            .and_then(|index| order.get(index))
            .map(|section| section.id.clone())
        else {
            return;
        };
        let moved = self.with_editor(|editor, sections, notify| {
            editor.drag_over(sections, &target, notify)
        });
        if moved {
            self.select(&dragged);
        }
    }

    /// Drops the dragged section where it is.
    pub fn drop_drag(&mut self) {
        self.editor.drag_end();
    }

    #[must_use]
    /// Controls of the expanded section.
    pub fn current_controls(&self) -> Vec<ControlView> {
        self.expanded_section()
            .map(dispatch::controls)
            .unwrap_or_default()
    }

    /// Moves the cursor into the expanded section's controls.
    pub fn enter_fields(&mut self) {
        if self.current_controls().is_empty() {
            self.message = Some("Nothing to edit here".to_string());
            return;
        }
        self.current_control_index = 0;
        self.current_view = View::Fields;
    }

    /// Returns from the controls to the section list.
    pub fn exit_fields(&mut self) {
        self.current_view = View::List;
    }

    /// Cursor to the next control.
    pub fn select_next_control(&mut self) {
        if self.current_control_index + 1 < self.current_controls().len() {
            self.current_control_index += 1;
        }
    }

    /// Cursor to the previous control.
    pub fn select_prev_control(&mut self) {
        self.current_control_index = self.current_control_index.saturating_sub(1);
    }

    /// Activates the selected control: edits text, flips a checkbox, or presses a button.
    pub fn activate_control(&mut self) {
        let Some(id) = self.editor.expanded().cloned() else {
            return;
        };
        let Some(view) = self.current_controls().into_iter().nth(self.current_control_index)
        else {
            return;
        };
        if !view.enabled {
            self.message = Some(format!("{} is disabled", view.label));
            return;
        }
        match view.value {
            ControlValue::Text(text) => {
                self.open_editor(&text, EditTarget::Control {
                    section: id,
                    control: view.control,
                });
            }
            ControlValue::Checkbox(checked) => {
                self.trigger(&id, view.control, Input::Checked(!checked));
            }
            ControlValue::Button => {
                self.trigger(&id, view.control, Input::Press);
                if view.control == Control::Assist {
                    self.message = Some("Assist requested".to_string());
                }
            }
        }
        let len = self.current_controls().len();
        self.current_control_index = self.current_control_index.min(len.saturating_sub(1));
    }

    fn trigger(&mut self, id: &SectionId, control: Control, input: Input) {
        self.with_editor(|editor, sections, notify| {
            editor.trigger(sections, id, control, input, notify);
        });
    }

    /// Opens the editor on the title of the section under the cursor.
    pub fn start_rename(&mut self) {
        if let Some(section) = self.current_section() {
            let (title, id) = (section.title.clone(), section.id.clone());
            self.open_editor(&title, EditTarget::Title(id));
        }
    }

    fn open_editor(&mut self, text: &str, target: EditTarget) {
        self.editor_state = Some(EditorState::new(Lines::from(text)));
        self.edit_target = Some(target);
        self.current_view = View::Edit;
    }

    #[must_use]
    /// Text currently in the editor buffer.
    pub fn editor_text(&self) -> Option<String> {
        self.editor_state.as_ref().map(|editor_state| {
            editor_state
                .lines
                .iter_row()
                .map(|line| line.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    /// Writes the editor buffer to its target, as happens after every keystroke.
    pub fn push_edit(&mut self) {
        let (Some(text), Some(target)) = (self.editor_text(), self.edit_target.clone()) else {
            return;
        };
        match target {
            EditTarget::Title(id) => {
                self.with_editor(|editor, sections, notify| {
                    editor.rename_section(sections, &id, text, notify);
                });
            }
            EditTarget::Control { section, control } => {
                self.trigger(&section, control, Input::Text(text));
            }
        }
    }

    /// Closes the editor and returns to where it was opened from.
    pub fn exit_edit(&mut self) {
        let target = self.edit_target.take();
        self.editor_state = None;
        self.current_view = match target {
            Some(EditTarget::Control { .. }) => View::Fields,
            _ => View::List,
        };
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
