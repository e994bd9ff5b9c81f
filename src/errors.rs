use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed contact data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    pub fn is_missing_file(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
