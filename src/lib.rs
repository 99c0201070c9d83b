//! vitae: a section editor for structured resumes.
//!
//! The library is the editing core. A host application owns the ordered collection of
//! [`Section`]s and lends it to a [`SectionEditor`] for each interaction; the editor hands back
//! a complete new collection through a callback. The binary is one such host, a terminal UI.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod drag;
pub mod editor;
pub mod engine;
pub mod entries;
pub mod error;
pub mod expansion;
pub mod ids;
pub mod input;
pub mod section;
pub mod session;
pub mod ui;

pub use dispatch::{Control, ControlValue, ControlView, Input};
pub use drag::{DragController, DragState};
pub use editor::{AssistHook, SectionEditor};
pub use engine::{Applied, Mutation};
pub use error::Error;
pub use expansion::Expansion;
pub use ids::{ClockIds, IdSource, SequentialIds};
pub use section::{
    EducationEntry, Entry, EntryBase, EntryField, EntryId, ExperienceEntry, PersonalField,
    PersonalInfo, Section, SectionContent, SectionId, SectionKind, UnsupportedContent,
};
pub use session::{GateDecision, RouteGate, Session, User};
