#![forbid(unsafe_code)]

//! Top-level application model.
//!
//! # Controls
//!
//! - Printable keys / paste: edit the command line (Contact page)
//! - Enter: submit the command line
//! - Backspace: delete the last character
//! - Tab / Shift+Tab: switch page
//! - Esc / Ctrl+C: quit

use folio_core::{ContactSession, CursorBlink, Page, SiteConfig};
use web_time::Duration;

use crate::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use crate::frame::{Frame, Rect};
use crate::program::{Cmd, Model};
use crate::screens;
use crate::theme;

/// One tick per blink half-period.
pub const TICK_RATE: Duration = CursorBlink::HALF_PERIOD;

/// Top-level application message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Event(Event),
    SwitchTo(Page),
    Quit,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

/// Top-level application state.
pub struct PortfolioApp {
    config: SiteConfig,
    page: Page,
    contact: ContactSession,
    /// A key press stopped the cursor blink; the next tick releases it.
    key_held: bool,
}

impl PortfolioApp {
    #[must_use]
    pub fn new(config: SiteConfig, page: Page) -> Self {
        let contact = ContactSession::new(&config);
        Self {
            config,
            page,
            contact,
            key_held: false,
        }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn contact(&self) -> &ContactSession {
        &self.contact
    }

    fn handle_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if key.kind == KeyEventKind::Release {
            self.contact.key_up();
            self.key_held = false;
            return Cmd::none();
        }

        match key.code {
            KeyCode::Escape => return Cmd::msg(Msg::Quit),
            KeyCode::Char('c') | KeyCode::Char('d') if key.ctrl() => return Cmd::msg(Msg::Quit),
            KeyCode::Tab => return Cmd::msg(Msg::SwitchTo(self.page.next())),
            KeyCode::BackTab => return Cmd::msg(Msg::SwitchTo(self.page.prev())),
            _ => {}
        }

        if self.page != Page::Contact {
            return Cmd::none();
        }

        self.contact.key_down();
        self.key_held = true;
        match key.code {
            KeyCode::Enter => {
                let outcome = self.contact.submit_pending();
                tracing::debug!(outcome = outcome.as_str(), "contact command");
            }
            KeyCode::Backspace => {
                self.contact.backspace();
            }
            KeyCode::Char(c) if !key.ctrl() && !key.alt() => self.contact.insert_char(c),
            _ => {}
        }
        Cmd::none()
    }

    fn draw_tabs(&self, frame: &mut Frame, row: Rect) {
        let mut x = row.x;
        for page in Page::ALL {
            let label = format!(" {} ", page.title());
            x = frame.print(x, row.y, &label, theme::tab(page == self.page), row.right());
            x += 1;
        }
        let hint = "Tab: switch page  Esc: quit";
        let hint_width = crate::wrap::display_width(hint) as u16;
        if row.width > x - row.x + hint_width + 1 {
            frame.print(row.right() - hint_width, row.y, hint, theme::secondary(), row.right());
        }
    }
}

impl Model for PortfolioApp {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        tracing::info!(page = %self.page, "portfolio app started");
        Cmd::tick(TICK_RATE)
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Event(Event::Key(key)) => self.handle_key(key),
            Msg::Event(Event::Paste(text)) => {
                if self.page == Page::Contact {
                    self.contact.insert_str(&text);
                }
                Cmd::none()
            }
            Msg::Event(Event::Tick) => {
                // Terminals rarely report key releases; the first tick after
                // a press stands in for one.
                if self.key_held {
                    self.contact.key_up();
                    self.key_held = false;
                } else {
                    self.contact.advance(TICK_RATE);
                }
                Cmd::none()
            }
            Msg::Event(Event::Resize { .. } | Event::Focus(_)) => Cmd::none(),
            Msg::SwitchTo(page) => {
                tracing::debug!(from = %self.page, to = %page, "page switch");
                self.page = page;
                Cmd::none()
            }
            Msg::Quit => Cmd::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.is_empty() {
            return;
        }
        let (tabs, body) = area.split_top(1);
        self.draw_tabs(frame, tabs);

        let content = body.inset(2, 1);
        match self.page {
            Page::Contact => screens::contact::draw(
                frame,
                content,
                &self.contact,
                &self.config.contact,
                &self.config.profiles,
            ),
            Page::Contest => screens::contest::draw(frame, content, &self.config.contest),
        }
    }
}
