use super::{
    add_entry, add_highlight, delete_entry, delete_highlight, set_current, update_field,
    update_highlight,
};
use crate::ids::SequentialIds;
use crate::section::{EntryBase, EntryField, EntryId, ExperienceEntry};

fn job(id: &str, company: &str) -> ExperienceEntry {
    ExperienceEntry {
        base: EntryBase {
            id: EntryId::new(id),
            start_date: "2019-06-01".to_string(),
            end_date: "2020-01-01".to_string(),
            current: false,
            highlights: vec!["First".to_string(), "Second".to_string()],
        },
        company: company.to_string(),
        position: "Engineer".to_string(),
    }
}

#[test]
fn test_update_field_touches_only_that_entry() {
    let entries = vec![job("1", "Acme"), job("2", "Globex")];
    let next = update_field(&entries, 0, EntryField::Organization, "Initech".to_string());

    assert_eq!(next[0].company, "Initech");
    assert_eq!(next[0].position, entries[0].position);
    assert_eq!(next[0].base, entries[0].base);
    assert_eq!(next[1], entries[1]);
}

#[test]
fn test_set_current_clears_end_date_atomically() {
    let entries = vec![job("1", "Acme")];
    let next = set_current(&entries, 0, true);

    assert!(next[0].base.current);
    assert_eq!(next[0].base.end_date, "");
}

#[test]
fn test_unset_current_keeps_end_date() {
    let mut entries = vec![job("1", "Acme")];
    entries[0].base.current = true;
    let next = set_current(&entries, 0, false);

    assert!(!next[0].base.current);
    assert_eq!(next[0].base.end_date, "2020-01-01");
}

#[test]
fn test_add_entry_is_blank_with_fresh_id() {
    let mut ids = SequentialIds::new();
    let entries = vec![job("1", "Acme")];
    let next = add_entry(&entries, &mut ids);

    assert_eq!(next.len(), 2);
    assert_eq!(next[0], entries[0]);
    assert_eq!(next[1].base.id.as_str(), "2", "Id 1 is taken so the next one is used");
    assert_eq!(next[1].company, "");
    assert_eq!(next[1].base.highlights, vec![String::new()]);
    assert!(!next[1].base.current);
}

#[test]
fn test_delete_entry_by_index() {
    let entries = vec![job("1", "Acme"), job("2", "Globex"), job("3", "Hooli")];
    let next = delete_entry(&entries, 1);

    let ids: Vec<&str> = next.iter().map(|e| e.base.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_highlight_operations() {
    let entries = vec![job("1", "Acme")];

    let added = add_highlight(&entries, 0);
    assert_eq!(added[0].base.highlights, vec!["First", "Second", ""]);

    let updated = update_highlight(&added, 0, 2, "Third".to_string());
    assert_eq!(updated[0].base.highlights[2], "Third");

    let removed = delete_highlight(&updated, 0, 0);
    assert_eq!(removed[0].base.highlights, vec!["Second", "Third"]);
}

#[test]
fn test_out_of_range_indices_are_noops() {
    let entries = vec![job("1", "Acme")];

    assert_eq!(update_field(&entries, 5, EntryField::Role, "x".to_string()), entries);
    assert_eq!(set_current(&entries, 5, true), entries);
    assert_eq!(delete_entry(&entries, 5), entries);
    assert_eq!(update_highlight(&entries, 0, 9, "x".to_string()), entries);
    assert_eq!(delete_highlight(&entries, 0, 9), entries);
    assert_eq!(add_highlight(&entries, 3), entries);
}
