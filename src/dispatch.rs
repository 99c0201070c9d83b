//! The render dispatcher maps each section variant to the controls it exposes.
//!
//! Presentation belongs to the host. What lives here is the contract: for a given section, which
//! controls exist, what they currently show, and exactly which mutation each one triggers. The
//! match over [`SectionContent`] is exhaustive, so adding a variant fails to compile until it
//! has been given its controls.

use crate::entries;
use crate::ids::IdSource;
use crate::section::{Entry, EntryField, PersonalField, Section, SectionContent};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A visible control bound to one mutation.
pub enum Control {
    /// Text input for a personal field.
    Personal(PersonalField),
    /// Summary text area.
    Summary,
    /// Hand-off to the assist hook; never changes content.
    Assist,
    /// Text input for an entry field.
    EntryText {
        /// Entry index.
        entry: usize,
        /// Field edited.
        field: EntryField,
    },
    /// "Current" checkbox of an entry.
    Current {
        /// Entry index.
        entry: usize,
    },
    /// Text input for one highlight.
    Highlight {
        /// Entry index.
        entry: usize,
        /// Highlight index.
        highlight: usize,
    },
    /// Button removing one highlight.
    RemoveHighlight {
        /// Entry index.
        entry: usize,
        /// Highlight index.
        highlight: usize,
    },
    /// Button appending an empty highlight.
    AddHighlight {
        /// Entry index.
        entry: usize,
    },
    /// Button removing an entry.
    RemoveEntry {
        /// Entry index.
        entry: usize,
    },
    /// Button appending a blank entry.
    AddEntry,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// What a control currently displays.
pub enum ControlValue {
    /// Text input contents.
    Text(String),
    /// Checkbox state.
    Checkbox(bool),
    /// Push button.
    Button,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A control together with everything a host needs to draw it.
pub struct ControlView {
    /// The control and the mutation it is bound to.
    pub control: Control,
    /// Visible label.
    pub label: String,
    /// Current value.
    pub value: ControlValue,
    /// Hint shown in an empty text input.
    pub placeholder: &'static str,
    /// Disabled controls ignore input.
    pub enabled: bool,
}

impl ControlView {
    fn text(control: Control, label: impl Into<String>, value: &str) -> Self {
        Self {
            control,
            label: label.into(),
            value: ControlValue::Text(value.to_string()),
            placeholder: "",
            enabled: true,
        }
    }

    fn button(control: Control, label: impl Into<String>) -> Self {
        Self {
            control,
            label: label.into(),
            value: ControlValue::Button,
            placeholder: "",
            enabled: true,
        }
    }

    fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// User input delivered to a control.
pub enum Input {
    /// New full text of a text input.
    Text(String),
    /// New checkbox state.
    Checked(bool),
    /// Button press.
    Press,
}

/// Guidance shown under the summary text area.
pub const SUMMARY_HINT: &str =
    "Aim for 3-4 sentences highlighting your key strengths and career objectives.";

fn personal_placeholder(field: PersonalField) -> &'static str {
    match field {
        PersonalField::Name => "Your full name",
        PersonalField::Email => "your@email.com",
        PersonalField::Phone => "Your phone number",
        PersonalField::Location => "City, Country",
    }
}

#[must_use]
/// Controls exposed by `section`, in display order.
pub fn controls(section: &Section) -> Vec<ControlView> {
    match &section.content {
        SectionContent::Personal(info) => PersonalField::ALL
            .into_iter()
            .map(|field| {
                ControlView::text(Control::Personal(field), field.label(), info.get(field))
                    .placeholder(personal_placeholder(field))
            })
            .collect(),
        SectionContent::Summary(text) => vec![
            ControlView::button(Control::Assist, "AI Assist"),
            ControlView::text(Control::Summary, "Summary", text).placeholder(
                "Write a brief summary of your professional background and goals...",
            ),
        ],
        SectionContent::Experience(list) => entry_controls(list),
        SectionContent::Education(list) => entry_controls(list),
        SectionContent::Skills(_) | SectionContent::Unsupported(_) => Vec::new(),
    }
}

fn entry_controls<E: Entry>(entries: &[E]) -> Vec<ControlView> {
    let mut views = Vec::new();
    for (entry, item) in entries.iter().enumerate() {
        let base = item.base();
        for field in [EntryField::Organization, EntryField::Role] {
            views.push(ControlView::text(
                Control::EntryText { entry, field },
                E::field_label(field),
                item.field(field),
            ));
        }
        views.push(ControlView::button(Control::RemoveEntry { entry }, "Remove"));
        views.push(ControlView::text(
            Control::EntryText {
                entry,
                field: EntryField::StartDate,
            },
            E::field_label(EntryField::StartDate),
            &base.start_date,
        ));
        let mut end_date = ControlView::text(
            Control::EntryText {
                entry,
                field: EntryField::EndDate,
            },
            E::field_label(EntryField::EndDate),
            &base.end_date,
        );
        end_date.enabled = !base.current;
        views.push(end_date);
        views.push(ControlView {
            control: Control::Current { entry },
            label: "Current".to_string(),
            value: ControlValue::Checkbox(base.current),
            placeholder: "",
            enabled: true,
        });
        for (highlight, text) in base.highlights.iter().enumerate() {
            views.push(
                ControlView::text(Control::Highlight { entry, highlight }, "Highlight", text)
                    .placeholder("Add a highlight..."),
            );
            views.push(ControlView::button(
                Control::RemoveHighlight { entry, highlight },
                "Remove",
            ));
        }
        views.push(ControlView::button(
            Control::AddHighlight { entry },
            "Add Highlight",
        ));
    }
    views.push(ControlView::button(
        Control::AddEntry,
        format!("Add {}", E::NOUN),
    ));
    views
}

/// Computes the content produced by delivering `input` to `control`.
///
/// Returns `None` when the control does not belong to this variant, the input does not fit
/// the control, the control is disabled, or the control is [`Control::Assist`], which is
/// routed to the assist hook instead of changing content.
pub fn apply(
    content: &SectionContent,
    control: Control,
    input: Input,
    ids: &mut dyn IdSource,
) -> Option<SectionContent> {
    match (content, control, input) {
        (SectionContent::Personal(info), Control::Personal(field), Input::Text(value)) => {
            let mut info = info.clone();
            *info.get_mut(field) = value;
            Some(SectionContent::Personal(info))
        }
        (SectionContent::Summary(_), Control::Summary, Input::Text(value)) => {
            Some(SectionContent::Summary(value))
        }
        (SectionContent::Experience(list), control, input) => {
            apply_entry(list, control, input, ids).map(SectionContent::Experience)
        }
        (SectionContent::Education(list), control, input) => {
            apply_entry(list, control, input, ids).map(SectionContent::Education)
        }
        (
            SectionContent::Personal(_)
            | SectionContent::Summary(_)
            | SectionContent::Skills(_)
            | SectionContent::Unsupported(_),
            ..,
        ) => None,
    }
}

fn apply_entry<E: Entry>(
    entries: &[E],
    control: Control,
    input: Input,
    ids: &mut dyn IdSource,
) -> Option<Vec<E>> {
    match (control, input) {
        (Control::EntryText { entry, field }, Input::Text(value)) => {
            let locked = field == EntryField::EndDate
                && entries.get(entry).is_some_and(|item| item.base().current);
            if locked {
                tracing::debug!(entry, "End date is disabled while the entry is current");
                return None;
            }
            Some(entries::update_field(entries, entry, field, value))
        }
        (Control::Current { entry }, Input::Checked(current)) => {
            Some(entries::set_current(entries, entry, current))
        }
        (Control::Highlight { entry, highlight }, Input::Text(value)) => {
            Some(entries::update_highlight(entries, entry, highlight, value))
        }
        (Control::RemoveHighlight { entry, highlight }, Input::Press) => {
            Some(entries::delete_highlight(entries, entry, highlight))
        }
        (Control::AddHighlight { entry }, Input::Press) => {
            Some(entries::add_highlight(entries, entry))
        }
        (Control::RemoveEntry { entry }, Input::Press) => Some(entries::delete_entry(entries, entry)),
        (Control::AddEntry, Input::Press) => Some(entries::add_entry(entries, ids)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/dispatch.rs"]
mod tests;
