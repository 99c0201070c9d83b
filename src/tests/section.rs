use super::{
    EducationEntry, Entry, EntryField, ExperienceEntry, PersonalField, Section, SectionContent,
    SectionId, SectionKind,
};

#[test]
fn test_new_section_defaults() {
    let section = Section::new(SectionId::new("experience-1"), SectionKind::Experience, 3);

    assert_eq!(section.title, "Experience");
    assert_eq!(section.content, SectionContent::Experience(Vec::new()));
    assert_eq!(section.order, 3);
    assert!(section.is_visible);
    assert_eq!(section.kind(), Some(SectionKind::Experience));
}

#[test]
fn test_free_text_kinds_default_to_empty_string() {
    assert_eq!(
        SectionContent::default_for(SectionKind::Summary),
        SectionContent::Summary(String::new())
    );
    assert_eq!(
        SectionContent::default_for(SectionKind::Skills),
        SectionContent::Skills(serde_json::Value::String(String::new()))
    );
}

#[test]
fn test_kind_parses_case_insensitively() {
    assert_eq!("Education".parse::<SectionKind>(), Ok(SectionKind::Education));
    assert_eq!(" skills ".parse::<SectionKind>(), Ok(SectionKind::Skills));
    assert!("hobbies".parse::<SectionKind>().is_err());
}

#[test]
fn test_entry_fields_resolve_per_shape() {
    let mut job = ExperienceEntry::blank(super::EntryId::new("1"));
    *job.field_mut(EntryField::Organization) = "Acme".to_string();
    *job.field_mut(EntryField::Role) = "Engineer".to_string();
    assert_eq!(job.company, "Acme");
    assert_eq!(job.position, "Engineer");

    let mut school = EducationEntry::blank(super::EntryId::new("2"));
    *school.field_mut(EntryField::Organization) = "MIT".to_string();
    *school.field_mut(EntryField::Role) = "BSc".to_string();
    assert_eq!(school.institution, "MIT");
    assert_eq!(school.degree, "BSc");

    assert_eq!(EducationEntry::field_label(EntryField::Organization), "Institution");
    assert_eq!(ExperienceEntry::field_label(EntryField::Role), "Position");
}

#[test]
fn test_blank_entry_has_one_empty_highlight() {
    let job = ExperienceEntry::blank(super::EntryId::new("7"));
    assert_eq!(job.base.highlights, vec![String::new()]);
    assert!(!job.base.current);
    assert_eq!(job.id().as_str(), "7");
}

#[test]
fn test_deserialize_wire_format() {
    let json = r#"{
        "id": "experience-1",
        "type": "experience",
        "title": "Work",
        "content": [{
            "id": "11",
            "company": "Acme",
            "position": "Engineer",
            "startDate": "2020-01-01",
            "endDate": "",
            "current": true,
            "highlights": ["Shipped things"]
        }],
        "order": 2,
        "isVisible": false
    }"#;

    let section: Section = serde_json::from_str(json).unwrap();

    assert_eq!(section.title, "Work");
    assert_eq!(section.order, 2);
    assert!(!section.is_visible);
    let SectionContent::Experience(entries) = &section.content else {
        panic!("Expected experience content, got {:?}", section.content);
    };
    assert_eq!(entries[0].company, "Acme");
    assert_eq!(entries[0].base.start_date, "2020-01-01");
    assert!(entries[0].base.current);
}

#[test]
fn test_serialize_emits_type_tag_and_camel_case() {
    let section = Section::new(SectionId::new("summary-9"), SectionKind::Summary, 0);
    let value = serde_json::to_value(&section).unwrap();

    assert_eq!(value["type"], "summary");
    assert_eq!(value["content"], "");
    assert_eq!(value["isVisible"], true);
    assert_eq!(value["id"], "summary-9");
}

#[test]
fn test_missing_highlights_default_to_empty() {
    let json = r#"{"id":"education-1","type":"education","content":[{"id":"1","institution":"MIT"}]}"#;
    let section: Section = serde_json::from_str(json).unwrap();

    let SectionContent::Education(entries) = &section.content else {
        panic!("Expected education content");
    };
    assert!(entries[0].base.highlights.is_empty());
    assert_eq!(entries[0].degree, "");
    assert!(section.is_visible, "Visibility should default to true");
}

#[test]
fn test_malformed_content_falls_back_to_default() {
    let json = r#"{"id":"experience-1","type":"experience","content":"not a list"}"#;
    let section: Section = serde_json::from_str(json).unwrap();

    assert_eq!(section.content, SectionContent::Experience(Vec::new()));
}

#[test]
fn test_skills_payload_is_kept_verbatim() {
    let json = r#"{"id":"skills-1","type":"skills","content":["Rust","SQL"]}"#;
    let section: Section = serde_json::from_str(json).unwrap();

    assert_eq!(
        section.content,
        SectionContent::Skills(serde_json::json!(["Rust", "SQL"]))
    );
    let back = serde_json::to_value(&section).unwrap();
    assert_eq!(back["content"], serde_json::json!(["Rust", "SQL"]));
}

#[test]
fn test_personal_fields_default_when_absent() {
    let json = r#"{"id":"personal-1","type":"personal","content":{"name":"Ada"}}"#;
    let section: Section = serde_json::from_str(json).unwrap();

    let SectionContent::Personal(info) = &section.content else {
        panic!("Expected personal content");
    };
    assert_eq!(info.get(PersonalField::Name), "Ada");
    assert_eq!(info.get(PersonalField::Phone), "");
}

#[test]
fn test_unknown_type_is_kept_verbatim() {
    let json = r#"{"id":"p-1","type":"projects","title":"Projects","content":[{"name":"vitae"}],"order":4}"#;
    let section: Section = serde_json::from_str(json).unwrap();

    assert_eq!(section.kind(), None);
    assert_eq!(section.content.type_name(), "projects");
    assert_eq!(section.order, 4);

    let back = serde_json::to_value(&section).unwrap();
    assert_eq!(back["type"], "projects");
    assert_eq!(back["content"], serde_json::json!([{"name": "vitae"}]));
}

#[test]
fn test_damaged_entry_keeps_its_siblings() {
    let json = r#"{"id":"experience-1","type":"experience","content":[
        {"id":"1","company":"Acme","highlights":["a"]},
        {"id":"2","company":"Globex","highlights":null},
        {"company":null,"position":42,"current":"yes"},
        "not an entry"
    ]}"#;
    let section: Section = serde_json::from_str(json).unwrap();

    let SectionContent::Experience(entries) = &section.content else {
        panic!("Expected experience content, got {:?}", section.content);
    };
    assert_eq!(entries.len(), 3, "Only the non-object entry is dropped");
    assert_eq!(entries[0].company, "Acme");
    assert_eq!(entries[0].base.highlights, vec!["a".to_string()]);
    assert_eq!(entries[1].company, "Globex");
    assert!(entries[1].base.highlights.is_empty());
    assert_eq!(entries[2].company, "");
    assert_eq!(entries[2].position, "");
    assert!(!entries[2].base.current);
    assert_eq!(entries[2].id().as_str(), "entry-3", "Missing id is filled from position");
}

#[test]
fn test_null_personal_field_defaults() {
    let json = r#"{"id":"personal-1","type":"personal","content":{"name":"Ada","email":null}}"#;
    let section: Section = serde_json::from_str(json).unwrap();

    let SectionContent::Personal(info) = &section.content else {
        panic!("Expected personal content");
    };
    assert_eq!(info.name, "Ada");
    assert_eq!(info.email, "");
}
