//! Error types for lightbnb-db
//!
//! "No matching row" is never an error here: lookups return `Ok(None)` and
//! list operations return an empty `Vec`. Everything in [`DbError`] is a
//! real failure the caller has to handle.

use thiserror::Error;

use crate::models::ValidationError;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Error, Debug)]
pub enum DbError {
    /// Store failure that is not a recognised constraint violation
    #[error("database error: {0}")]
    Sqlx(#[source] sqlx::Error),

    /// A unique constraint rejected the write (e.g. duplicate user email)
    #[error("unique constraint violated{}", constraint_suffix(.constraint))]
    UniqueViolation { constraint: Option<String> },

    /// A foreign key rejected the write (e.g. property owner does not exist)
    #[error("foreign key constraint violated{}", constraint_suffix(.constraint))]
    ForeignKeyViolation { constraint: Option<String> },

    /// Input rejected before reaching the store
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl DbError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, Self::ForeignKeyViolation { .. })
    }
}

/// Classifies constraint violations so callers can match on them without
/// digging through driver-specific error codes.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().map(str::to_owned);
            if db_err.is_unique_violation() {
                return Self::UniqueViolation { constraint };
            }
            if db_err.is_foreign_key_violation() {
                return Self::ForeignKeyViolation { constraint };
            }
        }
        Self::Sqlx(err)
    }
}

fn constraint_suffix(constraint: &Option<String>) -> String {
    constraint
        .as_deref()
        .map(|name| format!(" ({name})"))
        .unwrap_or_default()
}
