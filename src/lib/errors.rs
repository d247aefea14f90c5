use thiserror::Error;

/// Fallback shown when a failed response carries no usable message.
pub const GENERIC_FAILURE: &str = "Request failed";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response. Displays as the bare server message.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result handed to UI code by operations that must never fail outright.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome<T = ()> {
    Success(T),
    Failure { error: String },
}

impl<T> ActionOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionOutcome::Success(_) => None,
            ActionOutcome::Failure { error } => Some(error),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ActionOutcome::Success(value) => Some(value),
            ActionOutcome::Failure { .. } => None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ActionOutcome::Failure {
            error: error.into(),
        }
    }
}

impl<T> From<Result<T, AppError>> for ActionOutcome<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => ActionOutcome::Success(value),
            Err(err) => ActionOutcome::failure(err.to_string()),
        }
    }
}
