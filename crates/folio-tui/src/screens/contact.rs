#![forbid(unsafe_code)]

//! Contact page: links panel plus the fake terminal window.
//!
//! Wide terminals put the panel left of the window; narrow ones stack it on
//! top. The terminal body always shows the most recent transcript rows with
//! the prompt line last.

use folio_core::{ContactCopy, ContactSession, ProfileLink};

use crate::frame::{Frame, Rect, Style};
use crate::theme;
use crate::wrap::{display_width, tail_rows, wrap_break_all};

/// Minimum width for the side-by-side layout.
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 72;
const PANEL_WIDTH: u16 = 30;
const PANEL_GAP: u16 = 3;

/// Visible body of the terminal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalBody {
    /// Rows top to bottom; the last rows belong to the prompt line.
    pub rows: Vec<String>,
    /// Column and row of the input cursor within `rows`.
    pub cursor: (u16, u16),
}

/// Lay out the transcript and prompt line for a body of `width × height`.
#[must_use]
pub fn terminal_body(session: &ContactSession, width: u16, height: u16) -> TerminalBody {
    let width = usize::from(width.max(1));
    let height = usize::from(height);
    if height == 0 {
        return TerminalBody {
            rows: Vec::new(),
            cursor: (0, 0),
        };
    }

    let prompt_line = format!("{} {}", session.prompt(), session.input());
    let mut prompt_rows = wrap_break_all(&prompt_line, width);
    // A full last row leaves no cell after the input; the cursor wraps.
    if prompt_rows.last().is_some_and(|row| display_width(row) >= width) {
        prompt_rows.push(String::new());
    }

    let mut rows = tail_rows(
        session.transcript().iter().map(String::as_str),
        width,
        height.saturating_sub(prompt_rows.len()),
    );
    rows.extend(prompt_rows);
    if rows.len() > height {
        rows.drain(..rows.len() - height);
    }

    let last = rows.len().saturating_sub(1);
    let cursor_col = rows.last().map_or(0, |row| display_width(row));
    TerminalBody {
        rows,
        cursor: (cursor_col as u16, last as u16),
    }
}

/// Draw the whole Contact page into `area`.
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    session: &ContactSession,
    copy: &ContactCopy,
    profiles: &[ProfileLink],
) {
    if area.is_empty() {
        return;
    }
    if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let (panel, window) = area.split_columns(PANEL_WIDTH, PANEL_GAP);
        draw_links(frame, panel, copy, profiles);
        draw_window(frame, window, session);
    } else {
        let panel_height = link_rows(copy, profiles, area.width).len() as u16;
        let (panel, rest) = area.split_top(panel_height);
        draw_links(frame, panel, copy, profiles);
        let (_, window) = rest.split_top(1);
        draw_window(frame, window, session);
    }
}

/// Rows of the links panel for a given width: heading, one label row plus
/// wrapped URL rows per profile, then the wrapped footer.
fn link_rows(copy: &ContactCopy, profiles: &[ProfileLink], width: u16) -> Vec<(String, Style)> {
    let width = usize::from(width.max(3));
    let mut rows = vec![(copy.heading.clone(), theme::heading()), (String::new(), Style::new())];

    for link in profiles {
        rows.push((format!("› {}", link.label), theme::link().bold()));
        for part in wrap_break_all(&link.url, width - 2) {
            rows.push((format!("  {part}"), theme::secondary()));
        }
        rows.push((String::new(), Style::new()));
    }

    for part in wrap_break_all(&copy.footer, width) {
        rows.push((part, Style::new().italic()));
    }
    rows
}

fn draw_links(frame: &mut Frame, area: Rect, copy: &ContactCopy, profiles: &[ProfileLink]) {
    for (offset, (text, style)) in link_rows(copy, profiles, area.width).iter().enumerate() {
        let Some(row) = area.row(offset as u16) else {
            break;
        };
        frame.print_in(row, text, *style);
    }
}

fn draw_window(frame: &mut Frame, area: Rect, session: &ContactSession) {
    if area.height < 2 || area.width < 4 {
        return;
    }
    let (header, body) = area.split_top(1);

    frame.fill(header, theme::terminal_header());
    let mut x = header.x + 1;
    for color in [theme::BUTTON_CLOSE, theme::BUTTON_MINIMIZE, theme::BUTTON_MAXIMIZE] {
        x = frame.print(x, header.y, "●", theme::terminal_header().fg(color), header.right());
        x += 1;
    }
    frame.print(x + 1, header.y, session.window_title(), theme::terminal_header(), header.right());

    frame.fill(body, theme::terminal_text());
    let inner = body.inset(1, 0);
    if inner.is_empty() {
        return;
    }
    let content = terminal_body(session, inner.width, inner.height);
    for (offset, text) in content.rows.iter().enumerate() {
        if let Some(row) = inner.row(offset as u16) {
            frame.print_in(row, text, theme::terminal_text());
        }
    }

    if session.cursor_visible() {
        let (col, row) = content.cursor;
        frame.set_cursor(Some((inner.x + col, inner.y + row)));
    }
}
