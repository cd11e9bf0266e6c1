#![forbid(unsafe_code)]

//! Break-anywhere line wrapping by display width.
//!
//! Transcript lines are long URLs more often than prose, so wrapping splits
//! at any character boundary rather than at word boundaries. Widths come
//! from `unicode-width`; control characters count as zero and are dropped.

use unicode_width::UnicodeWidthChar;

/// Display width of `text` in terminal columns, counted per character the
/// same way [`Frame::print`](crate::frame::Frame::print) places cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().filter_map(UnicodeWidthChar::width).sum()
}

/// Split `text` into rows no wider than `width` columns.
///
/// An empty line yields one empty row. A character wider than `width`
/// still gets a row of its own so no input is lost.
#[must_use]
pub fn wrap_break_all(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let w = match ch.width() {
            Some(w) if w > 0 => w,
            _ => continue,
        };
        if current_width + w > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Wrap every line and keep the last `max_rows` rows, so the most recent
/// line stays visible.
#[must_use]
pub fn tail_rows<'a, I>(lines: I, width: usize, max_rows: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rows: Vec<String> = lines
        .into_iter()
        .flat_map(|line| wrap_break_all(line, width))
        .collect();
    if rows.len() > max_rows {
        rows.drain(..rows.len() - max_rows);
    }
    rows
}
