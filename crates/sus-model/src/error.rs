use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("competence must be a 6-digit AAAAMM value, got {value:?}")]
    InvalidCompetence { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
