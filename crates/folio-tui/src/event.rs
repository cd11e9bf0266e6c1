#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Crossterm events are converted once at the edge into these types so the
//! app model and its tests never see backend types.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press` when the terminal does not report it
//! - `Modifiers` use bitflags for easy combination
//! - `Tick` is synthesized by the program loop, never read from the terminal

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// Paste event (from bracketed paste mode).
    Paste(String),

    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),

    /// Scheduled tick from the program loop.
    Tick,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A key press with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    F(u8),
    /// Anything folio does not act on.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl Event {
    /// Convert a crossterm event. Mouse input is not used and maps to `None`.
    #[must_use]
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::Event as Ct;

        match event {
            Ct::Key(key) => Some(Self::Key(map_key(key))),
            Ct::Resize(width, height) => Some(Self::Resize { width, height }),
            Ct::Paste(text) => Some(Self::Paste(text)),
            Ct::FocusGained => Some(Self::Focus(true)),
            Ct::FocusLost => Some(Self::Focus(false)),
            Ct::Mouse(_) => None,
        }
    }
}

fn map_key(key: crossterm::event::KeyEvent) -> KeyEvent {
    use crossterm::event::{KeyCode as Ck, KeyEventKind as Ckk, KeyModifiers as Cm};

    let code = match key.code {
        Ck::Char(c) => KeyCode::Char(c),
        Ck::Enter => KeyCode::Enter,
        Ck::Esc => KeyCode::Escape,
        Ck::Backspace => KeyCode::Backspace,
        Ck::Tab => KeyCode::Tab,
        Ck::BackTab => KeyCode::BackTab,
        Ck::Delete => KeyCode::Delete,
        Ck::Left => KeyCode::Left,
        Ck::Right => KeyCode::Right,
        Ck::Up => KeyCode::Up,
        Ck::Down => KeyCode::Down,
        Ck::Home => KeyCode::Home,
        Ck::End => KeyCode::End,
        Ck::F(n) => KeyCode::F(n),
        _ => KeyCode::Other,
    };

    let mut modifiers = Modifiers::NONE;
    if key.modifiers.contains(Cm::SHIFT) {
        modifiers |= Modifiers::SHIFT;
    }
    if key.modifiers.contains(Cm::ALT) {
        modifiers |= Modifiers::ALT;
    }
    if key.modifiers.contains(Cm::CONTROL) {
        modifiers |= Modifiers::CTRL;
    }
    if key.modifiers.contains(Cm::SUPER) {
        modifiers |= Modifiers::SUPER;
    }

    let kind = match key.kind {
        Ckk::Press => KeyEventKind::Press,
        Ckk::Repeat => KeyEventKind::Repeat,
        Ckk::Release => KeyEventKind::Release,
    };

    KeyEvent {
        code,
        modifiers,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event as ct;

    #[test]
    fn crossterm_ctrl_c_maps_to_ctrl_char() {
        let event = Event::from_crossterm(ct::Event::Key(ct::KeyEvent::new(
            ct::KeyCode::Char('c'),
            ct::KeyModifiers::CONTROL,
        )));
        let Some(Event::Key(key)) = event else {
            panic!("expected key event, got {event:?}");
        };
        assert!(key.is_char('c'));
        assert!(key.ctrl());
        assert!(!key.alt());
        assert_eq!(key.kind, KeyEventKind::Press);
    }

    #[test]
    fn crossterm_resize_and_paste_map_through() {
        assert_eq!(
            Event::from_crossterm(ct::Event::Resize(100, 30)),
            Some(Event::Resize {
                width: 100,
                height: 30
            })
        );
        assert_eq!(
            Event::from_crossterm(ct::Event::Paste("github".into())),
            Some(Event::Paste("github".into()))
        );
    }

    #[test]
    fn unused_keys_map_to_other() {
        let event = Event::from_crossterm(ct::Event::Key(ct::KeyEvent::new(
            ct::KeyCode::CapsLock,
            ct::KeyModifiers::NONE,
        )));
        assert_eq!(event, Some(Event::Key(KeyEvent::new(KeyCode::Other))));
    }
}
