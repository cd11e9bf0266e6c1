#![forbid(unsafe_code)]

//! WASM runner for the folio Contact terminal.
//!
//! [`ContactTerminal`] is a `wasm-bindgen` export wrapping a
//! [`folio_core::ContactSession`]; the page's JavaScript owns the DOM and
//! the event loop and calls into it for every keystroke and frame.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::ContactTerminal;

// Runner core is used by the wasm module and by native tests.
#[cfg(any(target_arch = "wasm32", test))]
mod runner_core;
