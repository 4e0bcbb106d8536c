use thiserror::Error;

/// Convenience result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned when the launch record cannot be loaded.
///
/// Loading is the only fallible step in the crate. Query and pipeline functions never return
/// errors; they degrade to a neutral value instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV is structurally invalid (unreadable header, ragged rows, bad UTF-8).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header.
    #[error("missing column: {message}")]
    MissingColumn { message: String },
}
