use thiserror::Error;

/// Error type for the export-write path; the analytics core itself is
/// infallible on well-formed input.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
