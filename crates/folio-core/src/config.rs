#![forbid(unsafe_code)]

//! Site content as data.
//!
//! [`SiteConfig`] holds every string the two pages display. It can be loaded
//! from TOML or JSON at startup; every field has a default, so a partial file
//! only overrides what it names and `SiteConfig::default()` reproduces the
//! published site.
//!
//! ```toml
//! # folio.toml
//! prompt = "user@host ~ %"
//! not_found_prefix = "zsh"
//!
//! [[profiles]]
//! kind = "github"
//! label = "GitHub"
//! url = "https://github.com/someone"
//!
//! [contest]
//! headline = "No Live Contest"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::{ContestBoard, ProfileKind, ProfileLink};
use crate::error::ConfigError;

/// Copy shown around the links panel on the Contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactCopy {
    pub heading: String,
    pub footer: String,
}

impl Default for ContactCopy {
    fn default() -> Self {
        Self {
            heading: "Connect with me".into(),
            footer: "Feel free to connect with me on these platforms!".into(),
        }
    }
}

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name printed by `whoami`.
    pub owner: String,
    /// Text after the dash in the `whoami` reply.
    pub tagline: String,
    /// Prefix of every echoed input line. A single space separates it from
    /// the input.
    pub prompt: String,
    /// Title drawn in the terminal window header.
    pub window_title: String,
    /// Transcript line present when a session starts.
    pub welcome: String,
    /// Optional shell name put in front of the "command not found" message,
    /// e.g. `"zsh"` gives `zsh: command not found: foo`.
    pub not_found_prefix: Option<String>,
    pub profiles: Vec<ProfileLink>,
    pub contact: ContactCopy,
    pub contest: ContestBoard,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Naman Sharma".into(),
            tagline: "Software Developer and Coding Enthusiast".into(),
            prompt: "naman@macbook-pro ~ %".into(),
            window_title: "naman@macbook-pro ~ zsh".into(),
            welcome: "Welcome to Naman's terminal. Type \"help\" for available commands.".into(),
            not_found_prefix: None,
            profiles: vec![
                ProfileLink::new(ProfileKind::GitHub, "https://github.com/NamanSharma1201"),
                ProfileLink::new(ProfileKind::LeetCode, "https://leetcode.com/Naman_Sharma_/"),
                ProfileLink::new(
                    ProfileKind::LinkedIn,
                    "https://www.linkedin.com/in/namansharma12/",
                ),
            ],
            contact: ContactCopy::default(),
            contest: ContestBoard::default(),
        }
    }
}

impl SiteConfig {
    /// Load from a TOML string and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON string and validate.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&read(path.as_ref())?)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&read(path.as_ref())?)
    }

    /// Load a file, choosing the format from its extension.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let config = match ext.as_deref() {
            Some("toml") => Self::from_toml_file(path)?,
            Some("json") => Self::from_json_file(path)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        tracing::info!(path = %path.display(), "site config loaded");
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Link for a given profile kind, if configured.
    #[must_use]
    pub fn profile(&self, kind: ProfileKind) -> Option<&ProfileLink> {
        self.profiles.iter().find(|link| link.kind == kind)
    }

    /// Check every field. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.prompt.trim().is_empty() {
            errors.push("prompt must not be empty".into());
        }

        for (idx, link) in self.profiles.iter().enumerate() {
            if link.label.trim().is_empty() {
                errors.push(format!("profiles[{idx}].label must not be empty"));
            }
            if !(link.url.starts_with("https://") || link.url.starts_with("http://")) {
                errors.push(format!(
                    "profiles[{idx}].url must start with http:// or https://, got {:?}",
                    link.url
                ));
            }
        }

        for kind in ProfileKind::ALL {
            let count = self.profiles.iter().filter(|l| l.kind == kind).count();
            if count != 1 {
                errors.push(format!(
                    "profiles must contain exactly one `{}` entry, found {count}",
                    kind.keyword()
                ));
            }
        }

        for (idx, record) in self.contest.records.iter().enumerate() {
            if record.name.trim().is_empty() {
                errors.push(format!("contest.records[{idx}].name must not be empty"));
            }
        }

        errors
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
