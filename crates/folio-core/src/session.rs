#![forbid(unsafe_code)]

//! Contact page session.
//!
//! One [`ContactSession`] per page instance. It owns the transcript, the line
//! being typed, and the cursor blink phase. Front ends feed it key input and
//! elapsed time and read it back to draw.

use core::time::Duration;

use crate::command::{Interpreter, Outcome};
use crate::config::SiteConfig;
use crate::transcript::Transcript;

/// Cursor blink state.
///
/// While a key is held the cursor is solid. Once released it blinks with a
/// fixed half-period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorBlink {
    blinking: bool,
    visible: bool,
    phase: Duration,
}

impl CursorBlink {
    /// Time the cursor stays in one state while blinking.
    pub const HALF_PERIOD: Duration = Duration::from_millis(500);

    #[must_use]
    pub fn new() -> Self {
        Self {
            blinking: true,
            visible: true,
            phase: Duration::ZERO,
        }
    }

    /// Stop blinking and show the cursor solid.
    pub fn hold(&mut self) {
        self.blinking = false;
        self.visible = true;
        self.phase = Duration::ZERO;
    }

    /// Resume blinking, starting from the visible half.
    pub fn release(&mut self) {
        if !self.blinking {
            self.blinking = true;
            self.visible = true;
            self.phase = Duration::ZERO;
        }
    }

    /// Advance the blink clock.
    pub fn advance(&mut self, dt: Duration) {
        if !self.blinking {
            return;
        }
        let half = Self::HALF_PERIOD.as_nanos();
        let elapsed = self.phase.saturating_add(dt).as_nanos();
        if (elapsed / half) % 2 == 1 {
            self.visible = !self.visible;
        }
        self.phase = Duration::from_nanos((elapsed % half) as u64);
    }

    #[must_use]
    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one Contact page.
#[derive(Debug, Clone)]
pub struct ContactSession {
    interpreter: Interpreter,
    transcript: Transcript,
    input: String,
    cursor: CursorBlink,
    window_title: String,
}

impl ContactSession {
    /// Start a session with the config's welcome line in the transcript.
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        let transcript = if config.welcome.is_empty() {
            Transcript::new()
        } else {
            Transcript::with_lines([config.welcome.clone()])
        };
        Self::with_transcript(Interpreter::from_config(config), transcript)
            .with_window_title(config.window_title.clone())
    }

    /// Start a session from an interpreter and an initial transcript.
    #[must_use]
    pub fn with_transcript(interpreter: Interpreter, transcript: Transcript) -> Self {
        Self {
            interpreter,
            transcript,
            input: String::new(),
            cursor: CursorBlink::new(),
            window_title: String::new(),
        }
    }

    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Submit an arbitrary line. The pending input is left alone.
    pub fn submit(&mut self, line: &str) -> Outcome {
        self.interpreter.submit(&mut self.transcript, line)
    }

    /// Submit the pending input and reset it to empty.
    pub fn submit_pending(&mut self) -> Outcome {
        let line = std::mem::take(&mut self.input);
        self.submit(&line)
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Append pasted text. Line breaks are dropped since one submission is
    /// one line.
    pub fn insert_str(&mut self, s: &str) {
        self.input
            .extend(s.chars().filter(|c| *c != '\n' && *c != '\r'));
    }

    /// Remove the last character of the pending input.
    pub fn backspace(&mut self) -> Option<char> {
        self.input.pop()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// A key went down: the cursor stops blinking.
    pub fn key_down(&mut self) {
        self.cursor.hold();
    }

    /// A key came up: the cursor blinks again.
    pub fn key_up(&mut self) {
        self.cursor.release();
    }

    pub fn advance(&mut self, dt: Duration) {
        self.cursor.advance(dt);
    }

    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.cursor.is_visible()
    }

    #[must_use]
    pub fn cursor(&self) -> &CursorBlink {
        &self.cursor
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.interpreter.prompt()
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    #[must_use]
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

impl Default for ContactSession {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}
