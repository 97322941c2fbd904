pub mod config;
pub mod error;
pub mod file_kind;
pub mod report;
