#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// The backend answered with a non-success status. The body is not read.
    #[error("{context}: {status}")]
    RequestFailed { context: &'static str, status: u16 },

    #[error("Transport error: {0}")]
    TransportFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// HTTP status carried by a `RequestFailed` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
