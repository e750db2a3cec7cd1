use anyhow::{Context, Result};
use csv::StringRecord;

use crate::domain::entities::project::{Project, ProjectField};

struct ColumnIndex {
    positions: Vec<(ProjectField, usize)>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        if headers.is_empty() {
            anyhow::bail!("csv header is required")
        }

        let positions = ProjectField::ALL
            .into_iter()
            .map(|field| {
                headers
                    .iter()
                    .position(|header| header.trim().eq_ignore_ascii_case(field.name()))
                    .map(|idx| (field, idx))
                    .with_context(|| format!("missing column: {}", field.name()))
            })
            .collect::<Result<_>>()?;
        Ok(Self { positions })
    }

    fn value<'r>(&self, record: &'r StringRecord, field: ProjectField) -> &'r str {
        self.positions
            .iter()
            .find(|(known, _)| *known == field)
            .and_then(|(_, idx)| record.get(*idx))
            .unwrap_or("")
            .trim()
    }
}

fn parse_progress(value: &str) -> Result<u8> {
    let progress: u8 = value
        .parse()
        .with_context(|| format!("progress is not an integer: {value:?}"))?;
    if progress > 100 {
        anyhow::bail!("progress out of range: {progress}")
    }
    Ok(progress)
}

/// Decodes the seed CSV. Dates are kept verbatim; malformed ones are left
/// for the sorter to handle.
pub fn parse_projects(text: &str) -> Result<Vec<Project>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .context("failed to read headers from seed csv")?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut projects = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("failed to parse csv record {}", row_idx + 1))?;
        let progress = parse_progress(columns.value(&record, ProjectField::Progress))
            .with_context(|| format!("invalid row {}", row_idx + 1))?;

        projects.push(Project {
            client: columns.value(&record, ProjectField::Client).to_string(),
            country: columns.value(&record, ProjectField::Country).to_string(),
            email: columns.value(&record, ProjectField::Email).to_string(),
            project: columns.value(&record, ProjectField::Project).to_string(),
            status: columns.value(&record, ProjectField::Status).to_string(),
            progress,
            date: columns.value(&record, ProjectField::Date).to_string(),
            image: columns.value(&record, ProjectField::Image).to_string(),
        });
    }

    Ok(projects)
}
