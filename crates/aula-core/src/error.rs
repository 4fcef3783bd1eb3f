use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Error contract of the service layer. Each variant carries its context in
/// structured form; the HTTP boundary translates them to a status exactly
/// once.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} with id {id} was not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("referenced {entity} with id {id} does not exist")]
    MissingReference { entity: &'static str, id: i32 },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn missing_reference(entity: &'static str, id: i32) -> Self {
        Self::MissingReference { entity, id }
    }

    /// Maps a unique-constraint violation to `Conflict` and passes every
    /// other database error through. Duplicate writes racing past validation
    /// end up here instead of in an application-level pre-check.
    pub(crate) fn on_unique<S: Into<String>>(err: DbErr, conflict: S) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(conflict.into()),
            _ => Self::Db(err),
        }
    }
}
