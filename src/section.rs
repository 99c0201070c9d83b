//! Section representation for resume documents.
//!
//! A section is one titled, typed block of the resume. Its kind is carried by the variant of its
//! content rather than by a separate tag, so a section can never claim to be an `experience`
//! block while holding a summary string. Experience and education share an entry base (id, dates,
//! `current` flag, highlights) and differ only in their two identity fields.

use serde::de::Deserializer;
use serde::ser::{SerializeStruct, Serializer};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Opaque, stable identifier of a section within its collection.
pub struct SectionId(String);

impl SectionId {
    #[must_use]
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    /// Borrows the identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Opaque, stable identifier of an entry within its section's list.
pub struct EntryId(String);

impl EntryId {
    #[must_use]
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    /// Borrows the identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Section kinds with a dedicated editor, serialised as the `type` tag.
pub enum SectionKind {
    /// Contact details.
    Personal,
    /// Free-text professional summary.
    Summary,
    /// Employment history.
    Experience,
    /// Academic history.
    Education,
    /// Skills block with an opaque payload.
    Skills,
}

impl SectionKind {
    /// Every kind, in the order they are usually presented.
    pub const ALL: [Self; 5] = [
        Self::Personal,
        Self::Summary,
        Self::Experience,
        Self::Education,
        Self::Skills,
    ];

    #[must_use]
    /// Wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
        }
    }

    #[must_use]
    /// Capitalised kind name, used as the title of a freshly added section.
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Summary => "Summary",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Returned when a name does not match any section kind.
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section kind: {}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for SectionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Reads a field, substituting its default for `null` or a value of the wrong type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Named contact fields of a `personal` section, each empty when absent.
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient")]
    /// Full name.
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    /// Contact email address.
    pub email: String,
    #[serde(deserialize_with = "lenient")]
    /// Contact phone number.
    pub phone: String,
    #[serde(deserialize_with = "lenient")]
    /// City and country.
    pub location: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Addressable field of [`PersonalInfo`].
pub enum PersonalField {
    /// [`PersonalInfo::name`].
    Name,
    /// [`PersonalInfo::email`].
    Email,
    /// [`PersonalInfo::phone`].
    Phone,
    /// [`PersonalInfo::location`].
    Location,
}

impl PersonalField {
    /// Fields in display order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Location];

    #[must_use]
    /// Human-readable field label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Location => "Location",
        }
    }
}

impl PersonalInfo {
    #[must_use]
    /// Reads one field.
    pub fn get(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::Name => &self.name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Location => &self.location,
        }
    }

    /// Mutable access to one field.
    pub fn get_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::Name => &mut self.name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Location => &mut self.location,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Fields shared by every experience and education entry.
pub struct EntryBase {
    #[serde(default, deserialize_with = "lenient")]
    /// Stable entry identifier.
    pub id: EntryId,
    #[serde(default, deserialize_with = "lenient")]
    /// Start date as entered (ISO date string or empty).
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient")]
    /// End date as entered; always empty while `current` is set.
    pub end_date: String,
    #[serde(default, deserialize_with = "lenient")]
    /// Whether the entry is ongoing.
    pub current: bool,
    #[serde(default, deserialize_with = "lenient")]
    /// Free-text bullet points.
    pub highlights: Vec<String>,
}

impl EntryBase {
    #[must_use]
    /// Blank base with a single empty highlight ready for typing.
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            highlights: vec![String::new()],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Text field of an entry addressable by the entry-level operations.
///
/// `Organization` and `Role` resolve to `company`/`position` on experience entries and to
/// `institution`/`degree` on education entries.
pub enum EntryField {
    /// Company or institution.
    Organization,
    /// Position or degree.
    Role,
    /// [`EntryBase::start_date`].
    StartDate,
    /// [`EntryBase::end_date`].
    EndDate,
}

/// Common behaviour of the two entry shapes.
pub trait Entry: Clone {
    /// Label of the [`EntryField::Organization`] field.
    const ORGANIZATION_LABEL: &'static str;
    /// Label of the [`EntryField::Role`] field.
    const ROLE_LABEL: &'static str;
    /// Singular noun used on the add button.
    const NOUN: &'static str;

    /// Entry with empty fields and one empty highlight.
    fn blank(id: EntryId) -> Self;
    /// Shared fields.
    fn base(&self) -> &EntryBase;
    /// Mutable shared fields.
    fn base_mut(&mut self) -> &mut EntryBase;
    /// Company or institution.
    fn organization(&self) -> &str;
    /// Mutable company or institution.
    fn organization_mut(&mut self) -> &mut String;
    /// Position or degree.
    fn role(&self) -> &str;
    /// Mutable position or degree.
    fn role_mut(&mut self) -> &mut String;

    /// Stable identifier.
    fn id(&self) -> &EntryId {
        &self.base().id
    }

    /// Reads a text field.
    fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Organization => self.organization(),
            EntryField::Role => self.role(),
            EntryField::StartDate => &self.base().start_date,
            EntryField::EndDate => &self.base().end_date,
        }
    }

    /// Mutable access to a text field.
    fn field_mut(&mut self, field: EntryField) -> &mut String {
        match field {
            EntryField::Organization => self.organization_mut(),
            EntryField::Role => self.role_mut(),
            EntryField::StartDate => &mut self.base_mut().start_date,
            EntryField::EndDate => &mut self.base_mut().end_date,
        }
    }

    /// Label shown next to a text field.
    fn field_label(field: EntryField) -> &'static str {
        match field {
            EntryField::Organization => Self::ORGANIZATION_LABEL,
            EntryField::Role => Self::ROLE_LABEL,
            EntryField::StartDate => "Start Date",
            EntryField::EndDate => "End Date",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One job in an `experience` section.
pub struct ExperienceEntry {
    #[serde(flatten)]
    /// Shared entry fields.
    pub base: EntryBase,
    #[serde(default, deserialize_with = "lenient")]
    /// Employer.
    pub company: String,
    #[serde(default, deserialize_with = "lenient")]
    /// Job title.
    pub position: String,
}

impl Entry for ExperienceEntry {
    const ORGANIZATION_LABEL: &'static str = "Company";
    const ROLE_LABEL: &'static str = "Position";
    const NOUN: &'static str = "Experience";

    fn blank(id: EntryId) -> Self {
        Self {
            base: EntryBase::blank(id),
            company: String::new(),
            position: String::new(),
        }
    }

    fn base(&self) -> &EntryBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntryBase {
        &mut self.base
    }

    fn organization(&self) -> &str {
        &self.company
    }

    fn organization_mut(&mut self) -> &mut String {
        &mut self.company
    }

    fn role(&self) -> &str {
        &self.position
    }

    fn role_mut(&mut self) -> &mut String {
        &mut self.position
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One qualification in an `education` section.
pub struct EducationEntry {
    #[serde(flatten)]
    /// Shared entry fields.
    pub base: EntryBase,
    #[serde(default, deserialize_with = "lenient")]
    /// School or university.
    pub institution: String,
    #[serde(default, deserialize_with = "lenient")]
    /// Qualification obtained.
    pub degree: String,
}

impl Entry for EducationEntry {
    const ORGANIZATION_LABEL: &'static str = "Institution";
    const ROLE_LABEL: &'static str = "Degree";
    const NOUN: &'static str = "Education";

    fn blank(id: EntryId) -> Self {
        Self {
            base: EntryBase::blank(id),
            institution: String::new(),
            degree: String::new(),
        }
    }

    fn base(&self) -> &EntryBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntryBase {
        &mut self.base
    }

    fn organization(&self) -> &str {
        &self.institution
    }

    fn organization_mut(&mut self) -> &mut String {
        &mut self.institution
    }

    fn role(&self) -> &str {
        &self.degree
    }

    fn role_mut(&mut self) -> &mut String {
        &mut self.degree
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A section whose `type` has no editor, kept verbatim so it survives a round trip.
pub struct UnsupportedContent {
    /// The `type` tag as written.
    pub kind: String,
    /// The `content` payload as written.
    pub payload: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq)]
/// Variant payload of a section; the variant determines the section kind.
pub enum SectionContent {
    /// Contact details.
    Personal(PersonalInfo),
    /// Summary text.
    Summary(String),
    /// Ordered jobs.
    Experience(Vec<ExperienceEntry>),
    /// Ordered qualifications.
    Education(Vec<EducationEntry>),
    /// Payload with no dedicated editor, kept verbatim.
    Skills(serde_json::Value),
    /// A section of a kind this editor does not know.
    Unsupported(UnsupportedContent),
}

impl SectionContent {
    #[must_use]
    /// Content given to a freshly added section of `kind`.
    pub fn default_for(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Personal => Self::Personal(PersonalInfo::default()),
            SectionKind::Summary => Self::Summary(String::new()),
            SectionKind::Experience => Self::Experience(Vec::new()),
            SectionKind::Education => Self::Education(Vec::new()),
            SectionKind::Skills => Self::Skills(serde_json::Value::String(String::new())),
        }
    }

    #[must_use]
    /// Kind implied by the variant, `None` for unsupported sections.
    pub fn kind(&self) -> Option<SectionKind> {
        match self {
            Self::Personal(_) => Some(SectionKind::Personal),
            Self::Summary(_) => Some(SectionKind::Summary),
            Self::Experience(_) => Some(SectionKind::Experience),
            Self::Education(_) => Some(SectionKind::Education),
            Self::Skills(_) => Some(SectionKind::Skills),
            Self::Unsupported(_) => None,
        }
    }

    #[must_use]
    /// The wire `type` tag.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unsupported(opaque) => &opaque.kind,
            known => known.kind().map_or("", SectionKind::as_str),
        }
    }

    /// Decodes a raw payload according to `kind`.
    ///
    /// A payload of the wrong shape is replaced by the kind's default content rather than
    /// rejected, so one damaged section never prevents the rest of a resume from loading.
    /// Entry lists are decoded entry by entry: a damaged field takes its default, and only an
    /// entry that is not an object at all is dropped.
    #[must_use]
    pub fn decode(kind: SectionKind, raw: serde_json::Value) -> Self {
        if raw.is_null() {
            return Self::default_for(kind);
        }
        let decoded = match kind {
            SectionKind::Personal => serde_json::from_value(raw).ok().map(Self::Personal),
            SectionKind::Summary => serde_json::from_value(raw).ok().map(Self::Summary),
            SectionKind::Experience => decode_entries(kind, raw).map(Self::Experience),
            SectionKind::Education => decode_entries(kind, raw).map(Self::Education),
            SectionKind::Skills => Some(Self::Skills(raw)),
        };
        decoded.unwrap_or_else(|| {
            tracing::warn!(%kind, "Malformed section content, using default");
            Self::default_for(kind)
        })
    }
}

fn decode_entries<E>(kind: SectionKind, raw: serde_json::Value) -> Option<Vec<E>>
where
    E: Entry + DeserializeOwned,
{
    let serde_json::Value::Array(items) = raw else {
        return None;
    };
    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<E>(item) {
            Ok(mut entry) => {
                if entry.id().as_str().is_empty() {
                    entry.base_mut().id = EntryId::new(format!("entry-{}", index + 1));
                }
                entries.push(entry);
            }
            Err(e) => tracing::warn!(%kind, index, error = %e, "Dropping unreadable entry"),
        }
    }
    Some(entries)
}

impl Serialize for SectionContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Personal(info) => info.serialize(serializer),
            Self::Summary(text) => text.serialize(serializer),
            Self::Experience(list) => list.serialize(serializer),
            Self::Education(list) => list.serialize(serializer),
            Self::Skills(payload) => payload.serialize(serializer),
            Self::Unsupported(opaque) => opaque.payload.serialize(serializer),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// One titled, typed, ordered block of the resume.
pub struct Section {
    /// Stable identifier, unique within the collection.
    pub id: SectionId,
    /// Display label, editable independently of the kind.
    pub title: String,
    /// Variant payload; determines the kind.
    pub content: SectionContent,
    /// Rank within the collection.
    pub order: usize,
    /// Display flag, independent of ordering.
    pub is_visible: bool,
}

impl Section {
    #[must_use]
    /// New visible section of `kind` with default content and the kind's label as title.
    pub fn new(id: SectionId, kind: SectionKind, order: usize) -> Self {
        Self {
            id,
            title: kind.label().to_string(),
            content: SectionContent::default_for(kind),
            order,
            is_visible: true,
        }
    }

    #[must_use]
    /// Kind implied by the content variant, `None` for unsupported sections.
    pub fn kind(&self) -> Option<SectionKind> {
        self.content.kind()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Section", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", self.content.type_name())?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("order", &self.order)?;
        state.serialize_field("isVisible", &self.is_visible)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSection {
    id: SectionId,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: serde_json::Value,
    #[serde(default)]
    order: usize,
    #[serde(default = "visible_by_default")]
    is_visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSection::deserialize(deserializer)?;
        let content = match raw.kind.parse::<SectionKind>() {
            Ok(kind) => SectionContent::decode(kind, raw.content),
            Err(e) => {
                tracing::warn!(id = %raw.id, "Keeping section verbatim: {e}");
                SectionContent::Unsupported(UnsupportedContent {
                    kind: raw.kind,
                    payload: raw.content,
                })
            }
        };
        Ok(Self {
            id: raw.id,
            title: raw.title,
            content,
            order: raw.order,
            is_visible: raw.is_visible,
        })
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
