#![forbid(unsafe_code)]

//! Folio core.
//!
//! Everything the portfolio pages know, independent of how they are drawn.
//!
//! # Key Components
//!
//! - [`Interpreter`] - Resolves a submitted line against the [`CommandTable`]
//! - [`Transcript`] - Ordered display lines of the fake terminal
//! - [`ContactSession`] - Per-page state: transcript, pending input, cursor
//! - [`SiteConfig`] - Site content loaded from TOML/JSON with defaults
//! - [`ContestBoard`] / [`ProfileLink`] - Static page data
//!
//! # Role in folio
//! `folio-core` has no I/O beyond reading a config file. The terminal front
//! end (`folio-tui`) and the browser runner (`folio-web`) each own one
//! [`ContactSession`] and re-render it after every submission.

pub mod command;
pub mod config;
pub mod content;
pub mod error;
pub mod session;
pub mod transcript;

pub use command::{CommandAction, CommandEntry, CommandTable, Interpreter, Outcome};
pub use config::{ContactCopy, SiteConfig};
pub use content::{ContestBoard, ContestRecord, Page, ProfileKind, ProfileLink};
pub use error::ConfigError;
pub use session::{ContactSession, CursorBlink};
pub use transcript::Transcript;
