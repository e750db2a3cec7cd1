use thiserror::Error;

use crate::observability::LogFormat;
use crate::PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page_size must be greater than zero")]
    InvalidPageSize,
    #[error("window title must not be empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub page_size: usize,
    pub window_title: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            window_title: "Dashboard".to_string(),
            log_format: LogFormat::for_build(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        if self.window_title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        Ok(())
    }
}
