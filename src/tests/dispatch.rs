use super::{apply, controls, Control, ControlValue, Input};
use crate::ids::SequentialIds;
use crate::section::{
    EducationEntry, Entry, EntryField, EntryId, PersonalField, PersonalInfo, Section,
    SectionContent, SectionId, SectionKind,
};

fn with_content(kind: SectionKind, content: SectionContent) -> Section {
    let mut section = Section::new(SectionId::new("s-1"), kind, 0);
    section.content = content;
    section
}

#[test]
fn test_personal_controls_follow_field_order() {
    let section = with_content(
        SectionKind::Personal,
        SectionContent::Personal(PersonalInfo {
            name: "Ada".to_string(),
            ..PersonalInfo::default()
        }),
    );
    let views = controls(&section);

    let labels: Vec<&str> = views.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, vec!["Name", "Email", "Phone", "Location"]);
    assert_eq!(views[0].value, ControlValue::Text("Ada".to_string()));
    assert_eq!(views[1].placeholder, "your@email.com");
}

#[test]
fn test_summary_exposes_assist() {
    let section = Section::new(SectionId::new("summary-1"), SectionKind::Summary, 0);
    let views = controls(&section);

    assert_eq!(views[0].control, Control::Assist);
    assert_eq!(views[1].control, Control::Summary);
}

#[test]
fn test_skills_has_no_controls() {
    let section = Section::new(SectionId::new("skills-1"), SectionKind::Skills, 0);
    assert!(controls(&section).is_empty());
}

#[test]
fn test_education_labels_and_add_button() {
    let entry = EducationEntry::blank(EntryId::new("1"));
    let section = with_content(SectionKind::Education, SectionContent::Education(vec![entry]));
    let views = controls(&section);

    assert_eq!(views[0].label, "Institution");
    assert_eq!(views[1].label, "Degree");
    let last = views.last().unwrap();
    assert_eq!(last.control, Control::AddEntry);
    assert_eq!(last.label, "Add Education");
}

#[test]
fn test_end_date_disabled_while_current() {
    let mut entry = EducationEntry::blank(EntryId::new("1"));
    entry.base.current = true;
    let section = with_content(SectionKind::Education, SectionContent::Education(vec![entry]));

    let end_date = controls(&section)
        .into_iter()
        .find(|v| {
            v.control
                == Control::EntryText {
                    entry: 0,
                    field: EntryField::EndDate,
                }
        })
        .unwrap();
    assert!(!end_date.enabled);

    let mut ids = SequentialIds::new();
    let rejected = apply(
        &section.content,
        end_date.control,
        Input::Text("2024-01-01".to_string()),
        &mut ids,
    );
    assert!(rejected.is_none(), "Disabled end date must not accept text");
}

#[test]
fn test_current_checkbox_sets_flag_and_clears_end_date() {
    let mut entry = EducationEntry::blank(EntryId::new("1"));
    entry.base.end_date = "2020-01-01".to_string();
    let content = SectionContent::Education(vec![entry]);
    let mut ids = SequentialIds::new();

    let next = apply(&content, Control::Current { entry: 0 }, Input::Checked(true), &mut ids)
        .unwrap();

    let SectionContent::Education(entries) = next else {
        panic!("Variant must not change");
    };
    assert!(entries[0].base.current);
    assert_eq!(entries[0].base.end_date, "");
}

#[test]
fn test_personal_text_edit() {
    let content = SectionContent::Personal(PersonalInfo::default());
    let mut ids = SequentialIds::new();

    let next = apply(
        &content,
        Control::Personal(PersonalField::Location),
        Input::Text("Lisbon, Portugal".to_string()),
        &mut ids,
    );

    let Some(SectionContent::Personal(info)) = next else {
        panic!("Expected personal content");
    };
    assert_eq!(info.location, "Lisbon, Portugal");
}

#[test]
fn test_mismatched_controls_are_rejected() {
    let mut ids = SequentialIds::new();
    let summary = SectionContent::Summary("Hi".to_string());

    assert!(apply(&summary, Control::AddEntry, Input::Press, &mut ids).is_none());
    assert!(apply(&summary, Control::Assist, Input::Press, &mut ids).is_none());
    assert!(apply(&summary, Control::Summary, Input::Press, &mut ids).is_none());
    assert!(apply(
        &SectionContent::Skills(serde_json::Value::Null),
        Control::Summary,
        Input::Text("x".to_string()),
        &mut ids
    )
    .is_none());
}

#[test]
fn test_add_entry_button() {
    let mut ids = SequentialIds::new();
    let next = apply(
        &SectionContent::Experience(Vec::new()),
        Control::AddEntry,
        Input::Press,
        &mut ids,
    );

    let Some(SectionContent::Experience(entries)) = next else {
        panic!("Expected experience content");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].base.highlights, vec![String::new()]);
}
