use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl CampusError {
    /// The error returned to callers that carry no session.
    pub fn unauthorized() -> Self {
        CampusError::Authentication("Unauthorized".to_string())
    }
}

pub type CampusResult<T> = Result<T, CampusError>;
