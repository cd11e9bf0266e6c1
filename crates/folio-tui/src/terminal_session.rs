#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! [`TerminalSession`] enters raw mode and the requested terminal features
//! on construction and restores everything on drop. A panic hook restores
//! the terminal too, so a crash never leaves the shell in raw mode.
//!
//! # Cleanup Order
//!
//! On drop, cleanup happens in reverse order of enabling:
//! 1. Disable bracketed paste (if enabled)
//! 2. Show cursor (always)
//! 3. Leave alternate screen (if enabled)
//! 4. Exit raw mode (always)

use std::io::{self, Write};
use std::sync::Once;
use std::time::Duration;

use crate::event::Event;

/// Terminal features to enable for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub alternate_screen: bool,
    pub bracketed_paste: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            bracketed_paste: true,
        }
    }
}

/// RAII guard over raw mode and terminal features.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen_enabled: bool,
    bracketed_paste_enabled: bool,
}

impl TerminalSession {
    /// Enter raw mode and enable the requested features.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or a feature toggle
    /// cannot be written. Whatever was enabled before the failure is
    /// restored by `Drop`.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        tracing::debug!("terminal raw mode enabled");

        let mut session = Self {
            alternate_screen_enabled: false,
            bracketed_paste_enabled: false,
        };
        let mut stdout = io::stdout();

        if options.alternate_screen {
            crossterm::execute!(
                stdout,
                crossterm::terminal::EnterAlternateScreen,
                crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
                crossterm::cursor::MoveTo(0, 0)
            )?;
            session.alternate_screen_enabled = true;
            tracing::debug!("alternate screen enabled");
        }

        if options.bracketed_paste {
            crossterm::execute!(stdout, crossterm::event::EnableBracketedPaste)?;
            session.bracketed_paste_enabled = true;
            tracing::debug!("bracketed paste enabled");
        }

        Ok(session)
    }

    /// Current terminal size (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    /// Wait up to `timeout` for one event.
    ///
    /// Returns `Ok(None)` on timeout or for events folio ignores.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<Option<Event>> {
        if crossterm::event::poll(timeout)? {
            let event = crossterm::event::read()?;
            Ok(Event::from_crossterm(event))
        } else {
            Ok(None)
        }
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();

        if self.bracketed_paste_enabled {
            let _ = crossterm::execute!(stdout, crossterm::event::DisableBracketedPaste);
            self.bracketed_paste_enabled = false;
        }

        let _ = crossterm::execute!(stdout, crossterm::cursor::Show);

        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }

        let _ = crossterm::terminal::disable_raw_mode();
        let _ = stdout.flush();
        tracing::debug!("terminal restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, crossterm::event::DisableBracketedPaste);
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}
