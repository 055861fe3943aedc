use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The archive carries no procedure listing; fatal to the whole sync.
    #[error("archive does not contain a procedure listing table")]
    MissingPrimaryTable,

    #[error("failed to read archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse table {name}: {source}")]
    Csv {
        name: String,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    InvalidCompetence(#[from] sus_model::ModelError),

    /// Raised by fetchers; the core never retries.
    #[error("failed to fetch rule archive: {message}")]
    Fetch { message: String },
}
