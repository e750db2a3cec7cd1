use std::borrow::Cow;

use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// One row of the projects table. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Project {
    pub client: String,
    pub country: String,
    pub email: String,
    pub project: String,
    pub status: String,
    pub progress: u8,
    pub date: String,
    pub image: String,
}

impl Project {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_project_date(&self.date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectField {
    Client,
    Country,
    Email,
    Project,
    Status,
    Progress,
    Date,
    Image,
}

impl ProjectField {
    pub const ALL: [ProjectField; 8] = [
        ProjectField::Client,
        ProjectField::Country,
        ProjectField::Email,
        ProjectField::Project,
        ProjectField::Status,
        ProjectField::Progress,
        ProjectField::Date,
        ProjectField::Image,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProjectField::Client => "client",
            ProjectField::Country => "country",
            ProjectField::Email => "email",
            ProjectField::Project => "project",
            ProjectField::Status => "status",
            ProjectField::Progress => "progress",
            ProjectField::Date => "date",
            ProjectField::Image => "image",
        }
    }

    #[allow(dead_code)]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// String form of the field as used by search and filters.
    pub fn value_text(self, project: &Project) -> Cow<'_, str> {
        match self {
            ProjectField::Client => Cow::Borrowed(&project.client),
            ProjectField::Country => Cow::Borrowed(&project.country),
            ProjectField::Email => Cow::Borrowed(&project.email),
            ProjectField::Project => Cow::Borrowed(&project.project),
            ProjectField::Status => Cow::Borrowed(&project.status),
            ProjectField::Progress => Cow::Owned(project.progress.to_string()),
            ProjectField::Date => Cow::Borrowed(&project.date),
            ProjectField::Image => Cow::Borrowed(&project.image),
        }
    }
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'/',
            _ => byte.is_ascii_digit(),
        })
}

/// Parses a `DD/MM/YYYY` date. Surrounding whitespace is ignored; anything
/// else (short years, unpadded fields, signs) is rejected.
pub fn parse_project_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if !has_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
