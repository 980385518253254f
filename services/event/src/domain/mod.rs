pub mod dashboard;
pub mod repository;
pub mod types;
