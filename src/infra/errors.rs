// src/infra/errors.rs — Error types for underbar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnderbarError {
    // Caller errors
    #[error("{operation} called on a null collection")]
    NullCollection { operation: &'static str },

    #[error("{operation}: invalid argument: {message}")]
    InvalidArgument {
        operation: &'static str,
        message: String,
    },

    #[error("Method '{method}' is not defined on {receiver}")]
    UnknownMethod { method: String, receiver: String },

    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    // Scheduling
    #[error("No tokio runtime available: {0}")]
    Runtime(#[from] tokio::runtime::TryCurrentError),
}

impl UnderbarError {
    pub fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        UnderbarError::InvalidArgument {
            operation,
            message: message.into(),
        }
    }

    /// True for errors caused by what the caller passed in, as opposed to
    /// configuration problems.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            UnderbarError::NullCollection { .. }
                | UnderbarError::InvalidArgument { .. }
                | UnderbarError::UnknownMethod { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, UnderbarError>;
