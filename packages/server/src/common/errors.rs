use thiserror::Error;

use super::auth::AuthError;

/// Errors returned by workflow actions.
///
/// Every variant is scoped to a single request. The API layer maps them to
/// GraphQL error codes and HTTP statuses (see `WorkflowError::code`).
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Malformed or out-of-range input.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation is illegal for the entity's current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The actor lacks the role or ownership required.
    #[error("Not authorized: {0}")]
    Authorization(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl WorkflowError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::InvalidState(_) => "INVALID_STATE",
            Self::Authorization(_) => "FORBIDDEN",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Database(_) => "INTERNAL",
        }
    }
}

impl From<AuthError> for WorkflowError {
    fn from(err: AuthError) -> Self {
        Self::Authorization(err.to_string())
    }
}

/// True when a database error is a unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_become_authorization() {
        let err: WorkflowError = AuthError::AuthenticationRequired.into();
        assert!(matches!(err, WorkflowError::Authorization(_)));
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[test]
    fn not_found_message_names_entity() {
        let err = WorkflowError::not_found("content", "abc");
        assert_eq!(err.to_string(), "content not found: abc");
    }
}
