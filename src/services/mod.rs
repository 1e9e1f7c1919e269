pub mod articles;
pub mod users;

use thiserror::Error;
use uuid::Uuid;

use crate::auth::password::PasswordError;
use crate::database::StoreError;

pub use articles::ArticleService;
pub use users::{SignupForm, UserService};

/// Client input rejected by a service, with the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {message}")]
pub struct ValidationError {
    pub message: String,
    pub location: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: location.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Signup input rejected (answered with 422)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Missing `{0}` in request body")]
    MissingField(&'static str),

    #[error("`{0}` cannot be empty")]
    EmptyField(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken(_) => {
                ServiceError::Validation(ValidationError::new("Username already taken", "username"))
            }
            other => ServiceError::Store(other),
        }
    }
}

/// Ids that are not UUIDs cannot match any record.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
