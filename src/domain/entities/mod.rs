pub mod project;
pub mod query;
