//! Obtaining the section collection the host starts from.
//!
//! A resume is a JSON array of section objects. Sections are returned in array order; ranks are
//! taken as written, so a file with gaps in `order` is loaded with those gaps intact. Duplicate
//! ids are reported but not repaired: mutations address the first section with a given id.

use crate::error::Error;
use crate::section::{
    Entry, EntryBase, EntryId, ExperienceEntry, PersonalInfo, Section, SectionContent, SectionId,
};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parses a JSON array of sections.
///
/// # Errors
///
/// Returns the JSON error if the text is not an array of section objects. Malformed content
/// inside an otherwise valid section is not an error; it decodes to the kind's default.
pub fn parse_sections(json: &str) -> Result<Vec<Section>, serde_json::Error> {
    let sections: Vec<Section> = serde_json::from_str(json)?;
    for duplicate in duplicate_ids(&sections) {
        tracing::warn!("Duplicate id in resume: {duplicate}");
    }
    Ok(sections)
}

#[must_use]
/// Section ids repeated across the collection, and entry ids repeated within one section.
///
/// Entry duplicates are reported as `section/entry`.
pub fn duplicate_ids(sections: &[Section]) -> Vec<String> {
    let mut duplicates = Vec::new();
    let mut seen = HashSet::new();
    for section in sections {
        if !seen.insert(&section.id) {
            duplicates.push(section.id.to_string());
        }
        let entry_ids: Vec<&EntryId> = match &section.content {
            SectionContent::Experience(list) => list.iter().map(Entry::id).collect(),
            SectionContent::Education(list) => list.iter().map(Entry::id).collect(),
            _ => Vec::new(),
        };
        let mut seen_entries = HashSet::new();
        for id in entry_ids {
            if !seen_entries.insert(id) {
                duplicates.push(format!("{}/{id}", section.id));
            }
        }
    }
    duplicates
}

/// Reads a JSON array of sections from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn read_sections(path: &Path) -> Result<Vec<Section>, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let sections = parse_sections(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = sections.len(), "Loaded sections");
    Ok(sections)
}

#[must_use]
/// A small resume to edit when no file is given.
pub fn demo_resume() -> Vec<Section> {
    vec![
        Section {
            id: SectionId::new("personal-1"),
            title: "Personal Information".to_string(),
            content: SectionContent::Personal(PersonalInfo {
                name: "Demo User".to_string(),
                email: "demo@interviewmaster.ai".to_string(),
                ..PersonalInfo::default()
            }),
            order: 0,
            is_visible: true,
        },
        Section {
            id: SectionId::new("summary-1"),
            title: "Professional Summary".to_string(),
            content: SectionContent::Summary(String::new()),
            order: 1,
            is_visible: true,
        },
        Section {
            id: SectionId::new("experience-1"),
            title: "Experience".to_string(),
            content: SectionContent::Experience(vec![ExperienceEntry {
                base: EntryBase {
                    id: EntryId::new("1"),
                    start_date: "2021-03-01".to_string(),
                    end_date: String::new(),
                    current: true,
                    highlights: vec!["Led the migration to a typed section model".to_string()],
                },
                company: "Acme Corp".to_string(),
                position: "Software Engineer".to_string(),
            }]),
            order: 2,
            is_visible: true,
        },
    ]
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
