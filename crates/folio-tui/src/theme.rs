#![forbid(unsafe_code)]

//! Colors and text styles shared by both pages.

use crossterm::style::Color;

use crate::frame::Style;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub const TERMINAL_BG: Color = rgb(0x1E, 0x1E, 0x1E);
pub const TERMINAL_HEADER_BG: Color = rgb(0x3A, 0x3A, 0x3A);
pub const TERMINAL_FG: Color = rgb(0xFF, 0xFF, 0xFF);
pub const BUTTON_CLOSE: Color = rgb(0xFF, 0x5F, 0x56);
pub const BUTTON_MINIMIZE: Color = rgb(0xFF, 0xBD, 0x2E);
pub const BUTTON_MAXIMIZE: Color = rgb(0x27, 0xC9, 0x3F);

pub const HEADING: Color = rgb(0xEC, 0xF0, 0xF1);
pub const CARD_TITLE: Color = rgb(0x5D, 0x9C, 0xEC);
pub const SECONDARY: Color = rgb(0x95, 0xA5, 0xA6);
pub const WINNER: Color = rgb(0x16, 0xA0, 0x85);
pub const CHIP_BG: Color = rgb(0x19, 0x76, 0xD2);
pub const LINK: Color = rgb(0x90, 0xCA, 0xF9);

#[must_use]
pub const fn terminal_text() -> Style {
    Style::new().fg(TERMINAL_FG).bg(TERMINAL_BG)
}

#[must_use]
pub const fn terminal_header() -> Style {
    Style::new().fg(TERMINAL_FG).bg(TERMINAL_HEADER_BG)
}

#[must_use]
pub const fn heading() -> Style {
    Style::new().fg(HEADING).bold()
}

#[must_use]
pub const fn secondary() -> Style {
    Style::new().fg(SECONDARY)
}

#[must_use]
pub const fn link() -> Style {
    Style::new().fg(LINK)
}

#[must_use]
pub const fn chip() -> Style {
    Style::new().fg(TERMINAL_FG).bg(CHIP_BG).bold()
}

#[must_use]
pub const fn card_border() -> Style {
    Style::new().fg(SECONDARY)
}

#[must_use]
pub const fn card_title() -> Style {
    Style::new().fg(CARD_TITLE).bold()
}

#[must_use]
pub const fn winner() -> Style {
    Style::new().fg(WINNER).bold()
}

#[must_use]
pub const fn tab(active: bool) -> Style {
    if active {
        Style::new().fg(TERMINAL_FG).bg(CHIP_BG).bold()
    } else {
        Style::new().fg(SECONDARY)
    }
}
