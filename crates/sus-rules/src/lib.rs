//! Versioned procedure-rule repository.

pub mod repository;

pub use repository::{RepositoryStatus, RuleRepository};
