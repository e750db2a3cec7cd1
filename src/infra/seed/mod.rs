pub mod csv;
pub mod repo;
