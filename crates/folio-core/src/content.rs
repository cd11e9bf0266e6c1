#![forbid(unsafe_code)]

//! Static page data: profile links, the contest board, and page identity.
//!
//! Profile URLs are display strings only. Nothing in folio opens them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which external profile a link points at.
///
/// Each kind maps to exactly one terminal command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    GitHub,
    LeetCode,
    LinkedIn,
}

impl ProfileKind {
    pub const ALL: [Self; 3] = [Self::GitHub, Self::LeetCode, Self::LinkedIn];

    /// Lower-case command keyword that prints this profile.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::LeetCode => "leetcode",
            Self::LinkedIn => "linkedin",
        }
    }

    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LeetCode => "LeetCode",
            Self::LinkedIn => "LinkedIn",
        }
    }
}

/// One entry of the "Connect with me" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub kind: ProfileKind,
    pub label: String,
    pub url: String,
}

impl ProfileLink {
    pub fn new(kind: ProfileKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            label: kind.default_label().to_string(),
            url: url.into(),
        }
    }

    /// Line printed by the matching terminal command, e.g. `GitHub: https://...`.
    #[must_use]
    pub fn reply_line(&self) -> String {
        format!("{}: {}", self.label, self.url)
    }
}

/// A finished contest shown on the Contest page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestRecord {
    pub name: String,
    pub date: String,
    pub winner: String,
}

impl ContestRecord {
    pub fn new(name: impl Into<String>, date: impl Into<String>, winner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            winner: winner.into(),
        }
    }

    /// The three text rows of a contest card.
    #[must_use]
    pub fn card_lines(&self) -> [String; 3] {
        [
            self.name.clone(),
            format!("Date: {}", self.date),
            format!("Winner: {}", self.winner),
        ]
    }
}

/// Everything the Contest page displays. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestBoard {
    pub headline: String,
    pub subheadline: String,
    pub chip: String,
    pub records: Vec<ContestRecord>,
}

impl Default for ContestBoard {
    fn default() -> Self {
        Self {
            headline: "No Live Contest".into(),
            subheadline: "Check back later for upcoming contests".into(),
            chip: "Past Contests".into(),
            records: vec![
                ContestRecord::new("Contest 1", "2023-01-15", "Alice"),
                ContestRecord::new("Contest 2", "2023-02-20", "Bob"),
                ContestRecord::new("Contest 3", "2023-03-25", "Charlie"),
            ],
        }
    }
}

/// The two pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Contact,
    Contest,
}

impl Page {
    pub const ALL: [Self; 2] = [Self::Contact, Self::Contest];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Contest => "Contest",
        }
    }

    /// Page after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Contact => Self::Contest,
            Self::Contest => Self::Contact,
        }
    }

    /// Page before this one, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        // Two pages: previous and next coincide.
        self.next()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error returned when a page name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0} (expected `contact` or `contest`)")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contact" => Ok(Self::Contact),
            "contest" => Ok(Self::Contest),
            _ => Err(UnknownPage(s.to_string())),
        }
    }
}
