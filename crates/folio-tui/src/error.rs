#![forbid(unsafe_code)]

use folio_core::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl AppError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use folio_core::ConfigError;

    #[test]
    fn usage_errors_exit_with_two() {
        assert_eq!(AppError::invalid("bad page").exit_code(), 2);
        let config = AppError::from(ConfigError::Validation(vec!["prompt is empty".into()]));
        assert_eq!(config.exit_code(), 2);
        assert_eq!(config.to_string(), "invalid config: prompt is empty");
    }

    #[test]
    fn io_errors_exit_with_one() {
        let error = AppError::from(std::io::Error::other("tty gone"));
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().contains("tty gone"));
    }
}
