#![forbid(unsafe_code)]

//! Contest page: banner plus a grid of past-contest cards.

use folio_core::{ContestBoard, ContestRecord};

use crate::frame::{Frame, Rect};
use crate::theme;

pub const CARD_WIDTH: u16 = 26;
/// Border, name, date, spacer, winner, border.
pub const CARD_HEIGHT: u16 = 6;
const CARD_GAP: u16 = 2;
const MAX_COLUMNS: u16 = 3;
/// Headline, subheadline, blank, chip, blank.
const BANNER_HEIGHT: u16 = 5;

/// How many cards fit side by side in `width` columns (at least one).
#[must_use]
pub fn columns_for(width: u16) -> u16 {
    ((width + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).clamp(1, MAX_COLUMNS)
}

/// Top-left corner of card `index` inside `grid`.
#[must_use]
pub fn card_origin(grid: Rect, index: usize) -> (u16, u16) {
    let columns = usize::from(columns_for(grid.width));
    let col = (index % columns) as u16;
    let row = (index / columns) as u16;
    let used = columns as u16 * CARD_WIDTH + (columns as u16 - 1) * CARD_GAP;
    let left = grid.x + grid.width.saturating_sub(used) / 2;
    (
        left + col * (CARD_WIDTH + CARD_GAP),
        grid.y + row * (CARD_HEIGHT + 1),
    )
}

/// Draw the whole Contest page into `area`.
pub fn draw(frame: &mut Frame, area: Rect, board: &ContestBoard) {
    if area.is_empty() {
        return;
    }
    let (banner, grid) = area.split_top(BANNER_HEIGHT);

    if let Some(row) = banner.row(0) {
        frame.print_centered(row, &board.headline, theme::heading());
    }
    if let Some(row) = banner.row(1) {
        frame.print_centered(row, &board.subheadline, theme::secondary());
    }
    if let Some(row) = banner.row(3) {
        frame.print_centered(row, &format!(" {} ", board.chip), theme::chip());
    }

    for (index, record) in board.records.iter().enumerate() {
        let (x, y) = card_origin(grid, index);
        if y >= grid.bottom() {
            break;
        }
        let card = Rect::new(x, y, CARD_WIDTH.min(grid.right().saturating_sub(x)), CARD_HEIGHT);
        draw_card(frame, card, record);
    }
}

fn draw_card(frame: &mut Frame, card: Rect, record: &ContestRecord) {
    frame.border(card, theme::card_border());
    let inner = card.inset(2, 1);
    let [name, date, winner] = record.card_lines();
    if let Some(row) = inner.row(0) {
        frame.print_in(row, &name, theme::card_title());
    }
    if let Some(row) = inner.row(1) {
        frame.print_in(row, &date, theme::secondary());
    }
    if let Some(row) = inner.row(3) {
        frame.print_in(row, &winner, theme::winner());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_tracks_width() {
        assert_eq!(columns_for(10), 1);
        assert_eq!(columns_for(CARD_WIDTH * 2 + CARD_GAP), 2);
        assert_eq!(columns_for(500), MAX_COLUMNS);
    }

    #[test]
    fn cards_fill_rows_left_to_right() {
        let grid = Rect::new(0, 10, 54, 40);
        assert_eq!(card_origin(grid, 0), (0, 10));
        assert_eq!(card_origin(grid, 1), (CARD_WIDTH + CARD_GAP, 10));
        assert_eq!(card_origin(grid, 2), (0, 10 + CARD_HEIGHT + 1));
    }

    #[test]
    fn default_board_renders_banner_and_three_cards() {
        let board = ContestBoard::default();
        let mut frame = Frame::new(100, 20);
        let area = frame.area();
        draw(&mut frame, area, &board);
        let text = frame.to_text();

        assert_eq!(text[0].trim(), "No Live Contest");
        assert_eq!(text[1].trim(), "Check back later for upcoming contests");
        assert_eq!(text[3].trim(), "Past Contests");

        let card_row = &text[BANNER_HEIGHT as usize + 1];
        for name in ["Contest 1", "Contest 2", "Contest 3"] {
            assert!(card_row.contains(name), "{text:#?}");
        }
        let winners = &text[BANNER_HEIGHT as usize + 4];
        for winner in ["Winner: Alice", "Winner: Bob", "Winner: Charlie"] {
            assert!(winners.contains(winner), "{text:#?}");
        }
    }

    #[test]
    fn narrow_page_stacks_cards() {
        let board = ContestBoard::default();
        let mut frame = Frame::new(30, 40);
        let area = frame.area();
        draw(&mut frame, area, &board);
        let text = frame.to_text();
        let rows_with_names: Vec<usize> = text
            .iter()
            .enumerate()
            .filter(|(_, row)| row.contains("Contest "))
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(rows_with_names.len(), 3, "{text:#?}");
        assert!(rows_with_names.windows(2).all(|w| w[1] - w[0] == 7));
    }

    #[test]
    fn empty_board_draws_banner_only() {
        let board = ContestBoard {
            records: Vec::new(),
            ..ContestBoard::default()
        };
        let mut frame = Frame::new(60, 12);
        let area = frame.area();
        draw(&mut frame, area, &board);
        assert!(frame.to_text()[5..].iter().all(String::is_empty));
    }
}
