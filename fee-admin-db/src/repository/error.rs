use fee_admin_api::ApiError;
use thiserror::Error;

/// Errors raised by repository implementations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A unique constraint rejected the write; carries the constraint name when known
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A stored row could not be mapped onto its model
    #[error("invalid row in {table}: {reason}")]
    InvalidRow { table: &'static str, reason: String },

    /// The session's transaction was already committed or rolled back
    #[error("transaction has been consumed")]
    SessionClosed,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepositoryError>;

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::UniqueViolation(constraint) => {
                ApiError::Conflict(format!("A record with the same unique value already exists ({constraint})"))
            }
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}
