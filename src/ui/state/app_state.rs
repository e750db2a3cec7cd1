use dioxus::prelude::*;

use crate::domain::entities::query::{FieldFilters, QueryState, SortSpec};

#[derive(Clone, Copy)]
pub struct AppState {
    pub sort: Signal<Option<SortSpec>>,
    pub search: Signal<String>,
    pub filters: Signal<FieldFilters>,
    pub page: Signal<usize>,
    pub sort_menu_open: Signal<bool>,
    pub filter_panel_open: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sort: use_signal(|| None::<SortSpec>),
            search: use_signal(String::new),
            filters: use_signal(FieldFilters::default),
            page: use_signal(|| 1_usize),
            sort_menu_open: use_signal(|| false),
            filter_panel_open: use_signal(|| false),
        }
    }

    pub fn query_state(&self) -> QueryState {
        QueryState {
            sort: *self.sort.read(),
            search: self.search.read().clone(),
            filters: self.filters.read().clone(),
            page: *self.page.read(),
        }
    }
}
