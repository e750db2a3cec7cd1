use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::domain::entities::query::{PageResult, QueryState};
use crate::usecase::engine::QueryEngine;
use crate::usecase::ports::repo::ProjectRepository;

pub struct QueryService {
    engine: QueryEngine,
}

impl QueryService {
    pub fn new(engine: QueryEngine) -> Self {
        Self { engine }
    }

    pub fn from_repository(repo: &dyn ProjectRepository, config: &AppConfig) -> Result<Self> {
        let projects = repo
            .load_projects()
            .context("failed to load seed projects")?;
        let engine = QueryEngine::new(projects, config.page_size)
            .context("failed to build query engine")?;

        if engine.is_empty() {
            tracing::warn!("seed contains no projects");
        }
        tracing::info!(
            record_count = engine.len(),
            page_size = engine.page_size(),
            "query engine ready"
        );
        Ok(Self::new(engine))
    }

    pub fn query_page(&self, state: &QueryState) -> PageResult {
        let result = self.engine.apply(state);

        if result.page != state.page.max(1) {
            tracing::info!(
                requested = state.page,
                clamped = result.page,
                total_pages = result.total_pages,
                "requested page out of range"
            );
        }
        tracing::debug!(
            page = result.page,
            total_pages = result.total_pages,
            total_rows = result.total_rows,
            search = %state.search,
            sort = ?state.sort,
            "query applied"
        );
        result
    }
}
