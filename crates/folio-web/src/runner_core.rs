#![forbid(unsafe_code)]

//! Platform-independent runner core wrapping a [`ContactSession`].
//!
//! This module holds the logic shared between the wasm-bindgen exports and
//! the native tests. No JS/WASM types here.

use core::time::Duration;

use folio_core::{ContactSession, SiteConfig};

/// Host-driven Contact terminal: the page pushes keystrokes and time, then
/// reads back the transcript, input line and cursor state.
pub struct RunnerCore {
    config: SiteConfig,
    session: ContactSession,
    /// Drained by `take_logs`.
    logs: Vec<String>,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl RunnerCore {
    /// Create a runner from an optional JSON site config.
    ///
    /// A config that fails to parse or validate is replaced by the built-in
    /// one and the reason is logged.
    pub fn new(config_json: Option<&str>) -> Self {
        let mut logs = Vec::new();
        let config = match config_json.map(str::trim).filter(|json| !json.is_empty()) {
            None => SiteConfig::default(),
            Some(json) => SiteConfig::from_json_str(json).unwrap_or_else(|err| {
                logs.push(format!("config_error: {err}; using built-in config"));
                SiteConfig::default()
            }),
        };
        let session = ContactSession::new(&config);
        Self {
            config,
            session,
            logs,
        }
    }

    /// Submit `line` as if typed at the prompt. Returns the outcome name.
    pub fn submit(&mut self, line: &str) -> &'static str {
        self.session.submit(line).as_str()
    }

    /// Submit and clear the current input line.
    pub fn submit_pending(&mut self) -> &'static str {
        self.session.submit_pending().as_str()
    }

    pub fn push_char(&mut self, c: char) {
        self.session.insert_char(c);
    }

    pub fn backspace(&mut self) -> bool {
        self.session.backspace().is_some()
    }

    pub fn set_input(&mut self, input: &str) {
        self.session.set_input(input);
    }

    pub fn key_down(&mut self) {
        self.session.key_down();
    }

    pub fn key_up(&mut self) {
        self.session.key_up();
    }

    /// Advance the blink clock by `dt_ms` milliseconds.
    pub fn advance_time_ms(&mut self, dt_ms: f64) {
        // Host timestamps can be NaN, infinite or go backwards.
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return;
        }
        let secs = (dt_ms / 1000.0).min(Duration::MAX.as_secs_f64());
        let duration = Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX);
        self.session.advance(duration);
    }

    pub fn cursor_visible(&self) -> bool {
        self.session.cursor_visible()
    }

    pub fn transcript(&self) -> &[String] {
        self.session.transcript().lines()
    }

    pub fn input(&self) -> &str {
        self.session.input()
    }

    pub fn prompt(&self) -> &str {
        self.session.prompt()
    }

    pub fn window_title(&self) -> &str {
        self.session.window_title()
    }

    /// Profile links as a JSON array of `{kind, label, url}`.
    pub fn profiles_json(&self) -> String {
        serde_json::to_string(&self.config.profiles).unwrap_or_else(|_| "[]".into())
    }

    /// The contest board as a JSON object.
    pub fn contests_json(&self) -> String {
        serde_json::to_string(&self.config.contest).unwrap_or_else(|_| "{}".into())
    }

    pub fn take_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.logs)
    }
}
