#![forbid(unsafe_code)]

//! Terminal front end for the folio Contact and Contest pages.
//!
//! The Contact page renders a fake terminal window driven by
//! [`folio_core::ContactSession`]; the Contest page shows the past-contest
//! board. Both run on a small Elm-style runtime ([`program`]) over crossterm.
//!
//! The `folio` binary also exposes non-interactive subcommands (`exec`,
//! `contests`, `print-config`) for scripting.

pub mod app;
pub mod cli;
pub mod error;
pub mod event;
pub mod frame;
pub mod program;
pub mod screens;
pub mod terminal_session;
pub mod theme;
pub mod wrap;

pub use app::{Msg, PortfolioApp};
pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{AppError, Result};
pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use frame::{Frame, Rect, Style};
pub use program::{Cmd, Model, Program};
