use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a [`SiteConfig`](crate::SiteConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config extension: {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid config: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn validation_message_joins_all_problems() {
        let error = ConfigError::Validation(vec!["prompt must not be empty".into(), "x".into()]);
        assert_eq!(
            error.to_string(),
            "invalid config: prompt must not be empty; x"
        );
    }
}
