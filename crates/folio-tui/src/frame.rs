#![forbid(unsafe_code)]

//! Cell grid that a view draws into.
//!
//! A [`Frame`] is a `width × height` grid of [`Cell`]s plus an optional
//! cursor position. Wide characters occupy two cells; the second one is a
//! continuation and is skipped when the row is presented or read back.
//! Anything drawn outside the grid is clipped.

use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

/// A rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Shrink by `h` columns on each side and `v` rows on each side.
    #[must_use]
    pub fn inset(&self, h: u16, v: u16) -> Self {
        Self {
            x: self.x.saturating_add(h),
            y: self.y.saturating_add(v),
            width: self.width.saturating_sub(h.saturating_mul(2)),
            height: self.height.saturating_sub(v.saturating_mul(2)),
        }
    }

    /// Split into left and right parts, the left one `left_width` wide
    /// (clamped), separated by `gap` columns.
    #[must_use]
    pub fn split_columns(&self, left_width: u16, gap: u16) -> (Self, Self) {
        let left_width = left_width.min(self.width);
        let right_x = self.x.saturating_add(left_width).saturating_add(gap);
        let left = Self::new(self.x, self.y, left_width, self.height);
        let right = Self::new(
            right_x.min(self.right()),
            self.y,
            self.right().saturating_sub(right_x),
            self.height,
        );
        (left, right)
    }

    /// Take `rows` rows off the top; returns `(top, rest)`.
    #[must_use]
    pub fn split_top(&self, rows: u16) -> (Self, Self) {
        let rows = rows.min(self.height);
        (
            Self::new(self.x, self.y, self.width, rows),
            Self::new(self.x, self.y + rows, self.width, self.height - rows),
        )
    }

    /// A row of this rect, if it exists.
    #[must_use]
    pub fn row(&self, offset: u16) -> Option<Self> {
        (offset < self.height).then(|| Self::new(self.x, self.y + offset, self.width, 1))
    }
}

/// Text attributes of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            italic: false,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
    /// Right half of a wide character drawn in the cell to the left.
    pub continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::new(),
            continuation: false,
        }
    }
}

/// Drawing surface for one rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    cursor: Option<(u16, u16)>,
}

impl Frame {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
            cursor: None,
        }
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Show the terminal cursor at `(x, y)` after presenting.
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    #[must_use]
    pub const fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Paint every cell in `area` with `style`, clearing its content.
    pub fn fill(&mut self, area: Rect, style: Style) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                if let Some(idx) = self.index(x, y) {
                    self.cells[idx] = Cell {
                        ch: ' ',
                        style,
                        continuation: false,
                    };
                }
            }
        }
    }

    /// Draw `text` starting at `(x, y)`, clipped to `max_x` (exclusive) and
    /// the frame edge. Control characters are skipped. Returns the column
    /// after the last drawn cell.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let limit = max_x.min(self.width);
        let mut col = x;
        if y >= self.height {
            return col;
        }
        for ch in text.chars() {
            let Some(w) = ch.width() else { continue };
            if w == 0 {
                continue;
            }
            let w = w as u16;
            if col + w > limit {
                break;
            }
            if let Some(idx) = self.index(col, y) {
                self.cells[idx] = Cell {
                    ch,
                    style,
                    continuation: false,
                };
            }
            if w == 2 {
                if let Some(idx) = self.index(col + 1, y) {
                    self.cells[idx] = Cell {
                        ch: ' ',
                        style,
                        continuation: true,
                    };
                }
            }
            col += w;
        }
        col
    }

    /// Draw `text` inside `area`'s first row.
    pub fn print_in(&mut self, area: Rect, text: &str, style: Style) -> u16 {
        if area.is_empty() {
            return area.x;
        }
        self.print(area.x, area.y, text, style, area.right())
    }

    /// Draw `text` horizontally centered in `area`'s first row.
    pub fn print_centered(&mut self, area: Rect, text: &str, style: Style) {
        let width = crate::wrap::display_width(text).min(usize::from(area.width)) as u16;
        let x = area.x + (area.width - width) / 2;
        self.print(x, area.y, text, style, area.right());
    }

    /// Draw a box outline around `area` using light box-drawing characters.
    pub fn border(&mut self, area: Rect, style: Style) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let (left, top) = (area.x, area.y);
        let (right, bottom) = (area.right() - 1, area.bottom() - 1);
        for x in left + 1..right {
            self.put(x, top, '─', style);
            self.put(x, bottom, '─', style);
        }
        for y in top + 1..bottom {
            self.put(left, y, '│', style);
            self.put(right, y, '│', style);
        }
        self.put(left, top, '╭', style);
        self.put(right, top, '╮', style);
        self.put(left, bottom, '╰', style);
        self.put(right, bottom, '╯', style);
    }

    /// Text of row `y` with trailing spaces removed. Continuation cells are
    /// skipped.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = usize::from(y) * usize::from(self.width);
        let row = &self.cells[start..start + usize::from(self.width)];
        let text: String = row
            .iter()
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.ch)
            .collect();
        text.trim_end().to_string()
    }

    /// All rows as text, for assertions and plain-text dumps.
    #[must_use]
    pub fn to_text(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }

    /// Cells of row `y`, for presenters.
    #[must_use]
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = usize::from(y) * usize::from(self.width);
        &self.cells[start..start + usize::from(self.width)]
    }

    fn put(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell {
                ch,
                style,
                continuation: false,
            };
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}
