use super::{AssistHook, SectionEditor};
use crate::dispatch::{Control, Input};
use crate::engine::is_contiguous;
use crate::ids::SequentialIds;
use crate::section::{
    EntryBase, EntryField, EntryId, ExperienceEntry, Section, SectionContent, SectionId,
    SectionKind,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct RecordingAssist(Rc<RefCell<Vec<SectionId>>>);

impl AssistHook for RecordingAssist {
    fn request_assist(&self, section: &SectionId) {
        self.0.borrow_mut().push(section.clone());
    }
}

fn editor() -> SectionEditor<SequentialIds> {
    SectionEditor::new(SequentialIds::new())
}

fn job(id: &str, company: &str, end_date: &str) -> ExperienceEntry {
    ExperienceEntry {
        base: EntryBase {
            id: EntryId::new(id),
            start_date: "2018-01-01".to_string(),
            end_date: end_date.to_string(),
            current: false,
            highlights: vec!["Did things".to_string()],
        },
        company: company.to_string(),
        position: "Engineer".to_string(),
    }
}

fn resume() -> Vec<Section> {
    let mut experience = Section::new(SectionId::new("experience-1"), SectionKind::Experience, 0);
    experience.content = SectionContent::Experience(vec![
        job("1", "Acme", "2020-01-01"),
        job("2", "Globex", "2021-01-01"),
    ]);
    let summary = Section::new(SectionId::new("summary-1"), SectionKind::Summary, 1);
    let skills = Section::new(SectionId::new("skills-1"), SectionKind::Skills, 2);
    vec![experience, summary, skills]
}

/// Runs `op` against `sections` and returns every collection handed back.
fn collect(op: impl FnOnce(&mut dyn FnMut(Vec<Section>))) -> Vec<Vec<Section>> {
    let mut updates = Vec::new();
    op(&mut |next| updates.push(next));
    updates
}

#[test]
fn test_add_to_empty_expands_new_section() {
    let mut editor = editor();
    let mut created = None;
    let updates = collect(|notify| {
        created = Some(editor.add_section(&[], SectionKind::Experience, notify));
    });

    assert_eq!(updates.len(), 1);
    let sections = &updates[0];
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].kind(), Some(SectionKind::Experience));
    assert_eq!(sections[0].content, SectionContent::Experience(Vec::new()));
    assert_eq!(sections[0].order, 0);
    assert_eq!(editor.expanded(), created.as_ref());
}

#[test]
fn test_delete_expanded_section_clears_expansion() {
    let sections = resume();
    let mut editor = editor();
    let summary = SectionId::new("summary-1");
    editor.toggle_expanded(&summary);

    let updates = collect(|notify| editor.delete_section(&sections, &summary, notify));

    assert_eq!(updates[0].len(), 2);
    assert_eq!(editor.expanded(), None);
}

#[test]
fn test_delete_other_section_keeps_expansion() {
    let sections = resume();
    let mut editor = editor();
    let summary = SectionId::new("summary-1");
    editor.toggle_expanded(&summary);

    collect(|notify| editor.delete_section(&sections, &SectionId::new("skills-1"), notify));

    assert_eq!(editor.expanded(), Some(&summary));
}

#[test]
fn test_delete_renumbering_is_opt_in() {
    let sections = resume();
    let first = SectionId::new("experience-1");

    let mut plain = editor();
    let updates = collect(|notify| plain.delete_section(&sections, &first, notify));
    assert!(!is_contiguous(&updates[0]));

    let mut renumbering = editor().renumber_on_delete(true);
    let updates = collect(|notify| renumbering.delete_section(&sections, &first, notify));
    assert!(is_contiguous(&updates[0]));
}

#[test]
fn test_update_company_leaves_everything_else() {
    let sections = resume();
    let mut editor = editor();
    let id = SectionId::new("experience-1");

    let updates = collect(|notify| {
        editor.trigger(
            &sections,
            &id,
            Control::EntryText {
                entry: 0,
                field: EntryField::Organization,
            },
            Input::Text("Initech".to_string()),
            notify,
        );
    });

    let next = &updates[0];
    let SectionContent::Experience(before) = &sections[0].content else {
        unreachable!()
    };
    let SectionContent::Experience(after) = &next[0].content else {
        panic!("Content variant changed");
    };
    assert_eq!(after[0].company, "Initech");
    assert_eq!(after[0].base, before[0].base);
    assert_eq!(after[1], before[1]);
    assert_eq!(next[1..], sections[1..]);
}

#[test]
fn test_toggle_current_is_one_update() {
    let sections = resume();
    let mut editor = editor();
    let id = SectionId::new("experience-1");

    let updates = collect(|notify| {
        editor.trigger(
            &sections,
            &id,
            Control::Current { entry: 0 },
            Input::Checked(true),
            notify,
        );
    });

    assert_eq!(updates.len(), 1, "current and endDate change together");
    let SectionContent::Experience(after) = &updates[0][0].content else {
        panic!("Content variant changed");
    };
    assert!(after[0].base.current);
    assert_eq!(after[0].base.end_date, "");
}

#[test]
fn test_drag_scenario() {
    let sections = resume();
    let mut editor = editor();
    editor.drag_start(SectionId::new("experience-1"));

    let mut updates = Vec::new();
    let moved = editor.drag_over(&sections, &SectionId::new("skills-1"), |next| {
        updates.push(next);
    });
    assert!(moved);
    let layout: Vec<(&str, usize)> = updates[0]
        .iter()
        .map(|s| (s.id.as_str(), s.order))
        .collect();
    assert_eq!(
        layout,
        vec![("summary-1", 0), ("skills-1", 1), ("experience-1", 2)]
    );

    editor.drag_end();
    assert!(editor.dragging().is_none());
}

#[test]
fn test_self_drag_sends_nothing() {
    let sections = resume();
    let mut editor = editor();
    let id = SectionId::new("summary-1");
    editor.drag_start(id.clone());

    let updates = collect(|notify| {
        editor.drag_over(&sections, &id, notify);
    });
    assert!(updates.is_empty());
}

#[test]
fn test_drag_after_dragged_section_deleted() {
    let sections = resume();
    let mut editor = editor();
    let dragged = SectionId::new("summary-1");
    editor.drag_start(dragged.clone());

    let after_delete = collect(|notify| editor.delete_section(&sections, &dragged, notify));
    let updates = collect(|notify| {
        editor.drag_over(&after_delete[0], &SectionId::new("skills-1"), notify);
    });

    assert!(updates.is_empty(), "Stale drag must not reorder");
}

#[test]
fn test_assist_goes_to_hook_without_update() {
    let sections = resume();
    let hook = RecordingAssist::default();
    let mut editor = editor().with_assist(hook.clone());
    let summary = SectionId::new("summary-1");

    let updates = collect(|notify| {
        editor.trigger(&sections, &summary, Control::Assist, Input::Press, notify);
    });

    assert!(updates.is_empty());
    assert_eq!(*hook.0.borrow(), vec![summary]);
}

#[test]
fn test_assist_ignored_for_other_kinds() {
    let sections = resume();
    let hook = RecordingAssist::default();
    let mut editor = editor().with_assist(hook.clone());

    collect(|notify| {
        editor.trigger(
            &sections,
            &SectionId::new("experience-1"),
            Control::Assist,
            Input::Press,
            notify,
        );
    });

    assert!(hook.0.borrow().is_empty());
}

#[test]
fn test_add_keeps_order_contiguous_and_ids_stable() {
    let sections = resume();
    let mut editor = editor();

    let updates = collect(|notify| {
        editor.add_section(&sections, SectionKind::Education, notify);
    });

    let next = &updates[0];
    assert!(is_contiguous(next));
    for (old, new) in sections.iter().zip(next.iter()) {
        assert_eq!(old.id, new.id);
    }
}

#[test]
fn test_change_content_on_missing_section_returns_input() {
    let sections = resume();
    let editor = editor();

    let updates = collect(|notify| {
        editor.change_content(
            &sections,
            &SectionId::new("nope"),
            SectionContent::Summary("x".to_string()),
            notify,
        );
    });

    assert_eq!(updates, vec![sections]);
}
