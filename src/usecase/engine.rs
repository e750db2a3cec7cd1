//! In-memory table query engine.
//!
//! `QueryEngine::apply` runs search, field filters, sort and pagination in
//! that order over an immutable record set. Nothing here keeps state between
//! calls: the caller owns `QueryState` and re-applies it after every change.

use std::cmp::Ordering;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::entities::project::{Project, ProjectField};
use crate::domain::entities::query::{
    FieldFilters, PageResult, QueryState, SortDirection, SortKey, SortSpec,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("page_size must be greater than zero (got {0})")]
    InvalidPageSize(usize),
}

#[derive(Debug, Clone)]
pub struct QueryEngine {
    records: Arc<[Project]>,
    page_size: usize,
}

impl QueryEngine {
    pub fn new(records: Vec<Project>, page_size: usize) -> Result<Self, EngineError> {
        if page_size == 0 {
            return Err(EngineError::InvalidPageSize(page_size));
        }
        Ok(Self {
            records: records.into(),
            page_size,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record that survives search and filters, in sorted order.
    pub fn filtered_sorted(&self, state: &QueryState) -> Vec<Project> {
        let search = state.search.to_lowercase();
        let mut rows: Vec<Project> = self
            .records
            .iter()
            .filter(|project| matches_search(project, &search))
            .filter(|project| matches_filters(project, &state.filters))
            .cloned()
            .collect();

        if let Some(sort) = state.sort {
            sort_projects(&mut rows, sort);
        }
        rows
    }

    pub fn apply(&self, state: &QueryState) -> PageResult {
        let rows = self.filtered_sorted(state);
        let total_rows = rows.len();
        let total_pages = total_pages(total_rows, self.page_size);
        let page = clamp_page(state.page, total_pages);

        let start = (page - 1) * self.page_size;
        let visible = rows
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        PageResult {
            visible,
            page,
            total_pages,
            total_rows,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Empty query matches everything; otherwise any field may contain it.
pub fn matches_search(project: &Project, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    ProjectField::ALL
        .into_iter()
        .any(|field| contains_ignore_case(&field.value_text(project), &query))
}

pub fn matches_filters(project: &Project, filters: &FieldFilters) -> bool {
    filters.active().all(|(field, value)| {
        contains_ignore_case(&field.field().value_text(project), &value.to_lowercase())
    })
}

/// Ascending order for `key`. Dates that fail to parse compare after every
/// valid date and equal to each other.
pub fn compare_projects(a: &Project, b: &Project, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => match (a.parsed_date(), b.parsed_date()) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Progress => a.progress.cmp(&b.progress),
        other => {
            let field = other.field();
            field.value_text(a).cmp(&field.value_text(b))
        }
    }
}

fn compare_directed(a: &Project, b: &Project, key: SortKey, direction: SortDirection) -> Ordering {
    let ordering = compare_projects(a, b, key);
    match direction {
        SortDirection::Ascending => ordering,
        // The invalid-date sentinel is not subject to direction.
        SortDirection::Descending
            if key == SortKey::Date
                && (a.parsed_date().is_none() || b.parsed_date().is_none()) =>
        {
            ordering
        }
        SortDirection::Descending => ordering.reverse(),
    }
}

fn sort_projects(rows: &mut [Project], sort: SortSpec) {
    rows.sort_by(|a, b| compare_directed(a, b, sort.key, sort.direction));
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::query::FilterField;

    fn project(client: &str, date: &str, progress: u8) -> Project {
        Project {
            client: client.to_string(),
            country: "Kenya".to_string(),
            email: format!("{}@example.com", client.to_lowercase()),
            project: format!("{client} rollout"),
            status: "Pending".to_string(),
            progress,
            date: date.to_string(),
            image: format!("img/{}.png", client.to_lowercase()),
        }
    }

    fn clients(rows: &[Project]) -> Vec<&str> {
        rows.iter().map(|row| row.client.as_str()).collect()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = QueryEngine::new(Vec::new(), 0).expect_err("page size 0 should fail");
        assert_eq!(err, EngineError::InvalidPageSize(0));
    }

    #[test]
    fn empty_record_set_has_one_page() {
        let engine = QueryEngine::new(Vec::new(), 6).expect("engine should build");
        let result = engine.apply(&QueryState::default());

        assert!(result.visible.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page, 1);
    }

    #[test]
    fn search_matches_progress_and_image() {
        let row = project("Ben", "01/05/2024", 42);
        assert!(matches_search(&row, "42"));
        assert!(matches_search(&row, "IMG/BEN"));
        assert!(!matches_search(&row, "zzz"));
    }

    #[test]
    fn filters_combine_with_and() {
        let row = project("Ben", "01/05/2024", 42);
        let mut filters = FieldFilters::default();
        filters.set(FilterField::Client, "be");
        filters.set(FilterField::Country, "KEN");
        assert!(matches_filters(&row, &filters));

        filters.set(FilterField::Status, "approved");
        assert!(!matches_filters(&row, &filters));
    }

    #[test]
    fn invalid_dates_sort_last_in_both_directions() {
        let rows = vec![
            project("Bad", "not a date", 1),
            project("Late", "03/01/2025", 2),
            project("Early", "28/12/2023", 3),
        ];
        let engine = QueryEngine::new(rows, 10).expect("engine should build");

        let mut state = QueryState {
            sort: Some(SortSpec::ascending(SortKey::Date)),
            ..QueryState::default()
        };
        assert_eq!(
            clients(&engine.apply(&state).visible),
            vec!["Early", "Late", "Bad"]
        );

        state.sort = Some(SortSpec::descending(SortKey::Date));
        assert_eq!(
            clients(&engine.apply(&state).visible),
            vec!["Late", "Early", "Bad"]
        );
    }

    #[test]
    fn compare_projects_orders_ascending_per_key() {
        let early = project("Amy", "01/05/2024", 90);
        let late = project("Ben", "02/05/2024", 10);
        let undated = project("Cal", "soon", 50);

        assert_eq!(compare_projects(&early, &late, SortKey::Date), Ordering::Less);
        assert_eq!(compare_projects(&undated, &late, SortKey::Date), Ordering::Greater);
        assert_eq!(compare_projects(&undated, &undated, SortKey::Date), Ordering::Equal);
        assert_eq!(compare_projects(&early, &late, SortKey::Progress), Ordering::Greater);
        assert_eq!(compare_projects(&early, &late, SortKey::Client), Ordering::Less);
    }

    #[test]
    fn short_year_sorts_with_invalid_dates() {
        let rows = vec![
            project("Short", "01/05/24", 1),
            project("Unpadded", "1/5/2024", 1),
            project("Full", "01/05/2024", 1),
        ];
        let engine = QueryEngine::new(rows, 10).expect("engine should build");

        let mut state = QueryState {
            sort: Some(SortSpec::ascending(SortKey::Date)),
            ..QueryState::default()
        };
        assert_eq!(
            clients(&engine.apply(&state).visible),
            vec!["Full", "Short", "Unpadded"]
        );

        state.sort = Some(SortSpec::descending(SortKey::Date));
        assert_eq!(
            clients(&engine.apply(&state).visible),
            vec!["Full", "Short", "Unpadded"]
        );
    }

    #[test]
    fn progress_sorts_descending() {
        let rows = vec![
            project("A", "01/01/2024", 9),
            project("B", "01/01/2024", 100),
            project("C", "01/01/2024", 30),
        ];
        let engine = QueryEngine::new(rows, 10).expect("engine should build");
        let state = QueryState {
            sort: Some(SortSpec::descending(SortKey::Progress)),
            ..QueryState::default()
        };

        assert_eq!(clients(&engine.apply(&state).visible), vec!["B", "C", "A"]);
    }

    #[test]
    fn client_sorts_descending_case_sensitive() {
        let rows = vec![
            project("Alpha", "01/01/2024", 1),
            project("beta", "01/01/2024", 1),
            project("Gamma", "01/01/2024", 1),
        ];
        let engine = QueryEngine::new(rows, 10).expect("engine should build");
        let state = QueryState {
            sort: Some(SortSpec::descending(SortKey::Client)),
            ..QueryState::default()
        };

        assert_eq!(
            clients(&engine.apply(&state).visible),
            vec!["beta", "Gamma", "Alpha"]
        );
    }

    #[test]
    fn engine_reports_size_and_page_size() {
        let engine = QueryEngine::new(vec![project("A", "01/01/2024", 1)], 4)
            .expect("engine should build");
        assert_eq!(engine.len(), 1);
        assert!(!engine.is_empty());
        assert_eq!(engine.page_size(), 4);

        let empty = QueryEngine::new(Vec::new(), 4).expect("engine should build");
        assert!(empty.is_empty());
    }

    #[test]
    fn progress_sorts_numerically() {
        let rows = vec![
            project("A", "01/01/2024", 100),
            project("B", "01/01/2024", 9),
            project("C", "01/01/2024", 30),
        ];
        let engine = QueryEngine::new(rows, 10).expect("engine should build");
        let state = QueryState {
            sort: Some(SortSpec::ascending(SortKey::Progress)),
            ..QueryState::default()
        };

        assert_eq!(clients(&engine.apply(&state).visible), vec!["B", "C", "A"]);
    }

    #[test]
    fn string_sort_is_case_sensitive() {
        let rows = vec![
            project("beta", "01/01/2024", 1),
            project("Alpha", "01/01/2024", 1),
            project("Gamma", "01/01/2024", 1),
        ];
        let engine = QueryEngine::new(rows, 10).expect("engine should build");
        let state = QueryState {
            sort: Some(SortSpec::ascending(SortKey::Client)),
            ..QueryState::default()
        };

        assert_eq!(
            clients(&engine.apply(&state).visible),
            vec!["Alpha", "Gamma", "beta"]
        );
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(20, 6), 4);
    }
}
