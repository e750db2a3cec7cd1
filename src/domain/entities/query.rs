use crate::domain::entities::project::{Project, ProjectField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Client,
    Country,
    Date,
    Progress,
    Project,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Client,
        SortKey::Country,
        SortKey::Date,
        SortKey::Progress,
        SortKey::Project,
        SortKey::Status,
    ];

    pub fn field(self) -> ProjectField {
        match self {
            SortKey::Client => ProjectField::Client,
            SortKey::Country => ProjectField::Country,
            SortKey::Date => ProjectField::Date,
            SortKey::Progress => ProjectField::Progress,
            SortKey::Project => ProjectField::Project,
            SortKey::Status => ProjectField::Status,
        }
    }

    /// Unknown names yield `None`, which callers treat as "no sort".
    #[allow(dead_code)]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.field().name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Next sort after the user picks `key`: the same key flips direction,
    /// anything else starts ascending.
    pub fn toggle(current: Option<SortSpec>, key: SortKey) -> SortSpec {
        match current {
            Some(spec) if spec.key == key => SortSpec {
                key,
                direction: spec.direction.flipped(),
            },
            _ => SortSpec::ascending(key),
        }
    }
}

/// Arrow shown next to the sort button. Always derived from the current
/// `SortSpec`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Up,
    Down,
}

impl SortIndicator {
    pub fn from_sort(sort: Option<SortSpec>) -> Self {
        match sort.map(|spec| spec.direction) {
            None => SortIndicator::Unsorted,
            Some(SortDirection::Ascending) => SortIndicator::Up,
            Some(SortDirection::Descending) => SortIndicator::Down,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "⇅",
            SortIndicator::Up => "↑",
            SortIndicator::Down => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Client,
    Country,
    Email,
    Project,
    Status,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Client,
        FilterField::Country,
        FilterField::Email,
        FilterField::Project,
        FilterField::Status,
    ];

    pub fn field(self) -> ProjectField {
        match self {
            FilterField::Client => ProjectField::Client,
            FilterField::Country => ProjectField::Country,
            FilterField::Email => ProjectField::Email,
            FilterField::Project => ProjectField::Project,
            FilterField::Status => ProjectField::Status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Client => "Name",
            FilterField::Country => "Country",
            FilterField::Email => "Email",
            FilterField::Project => "Project",
            FilterField::Status => "Status",
        }
    }
}

/// One substring filter per filterable column. An empty value is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldFilters {
    pub client: String,
    pub country: String,
    pub email: String,
    pub project: String,
    pub status: String,
}

impl FieldFilters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Client => &self.client,
            FilterField::Country => &self.country,
            FilterField::Email => &self.email,
            FilterField::Project => &self.project,
            FilterField::Status => &self.status,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Client => &mut self.client,
            FilterField::Country => &mut self.country,
            FilterField::Email => &mut self.email,
            FilterField::Project => &mut self.project,
            FilterField::Status => &mut self.status,
        };
        *slot = value.into();
    }

    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> + '_ {
        FilterField::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|(_, value)| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

/// Caller-owned query state. The page is 1-based; 0 is read as 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub sort: Option<SortSpec>,
    pub search: String,
    pub filters: FieldFilters,
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            sort: None,
            search: String::new(),
            filters: FieldFilters::default(),
            page: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub visible: Vec<Project>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

impl PageResult {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }
}
