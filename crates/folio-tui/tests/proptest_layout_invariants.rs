//! Property-based invariant tests for wrapping and the terminal body layout.
//!
//! ## Invariants
//!
//! 1. Every wrapped row fits the width, unless it holds one wider glyph
//! 2. Wrapping loses nothing: rows concatenate back to the visible input
//! 3. Wrapping always yields at least one row
//! 4. `tail_rows` is a suffix of the full wrap, capped at `max_rows`
//! 5. The terminal body never exceeds its height and its cursor stays inside

use folio_core::{ContactSession, SiteConfig};
use folio_tui::screens::contact::terminal_body;
use folio_tui::wrap::{display_width, tail_rows, wrap_break_all};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use unicode_width::UnicodeWidthChar;

// ── Strategies ────────────────────────────────────────────────────────────

/// Mixed ASCII, CJK and the odd control character.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            6 => prop::char::range('a', 'z'),
            2 => Just(' '),
            1 => prop::char::range('\u{4E00}', '\u{4E20}'),
            1 => Just('\t'),
        ],
        0..80,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn visible(text: &str) -> String {
    text.chars()
        .filter(|c| c.width().is_some_and(|w| w > 0))
        .collect()
}

proptest! {
    #[test]
    fn rows_fit_width(text in arb_text(), width in 1usize..40) {
        for row in wrap_break_all(&text, width) {
            let w = display_width(&row);
            prop_assert!(w <= width || row.chars().count() == 1, "{row:?} is {w} wide");
        }
    }

    #[test]
    fn wrapping_is_lossless(text in arb_text(), width in 1usize..40) {
        let rows = wrap_break_all(&text, width);
        prop_assert!(!rows.is_empty());
        assert_eq!(rows.concat(), visible(&text));
    }

    #[test]
    fn tail_is_suffix_of_full_wrap(
        lines in prop::collection::vec(arb_text(), 0..12),
        width in 1usize..30,
        max_rows in 0usize..20,
    ) {
        let full: Vec<String> = lines.iter().flat_map(|l| wrap_break_all(l, width)).collect();
        let tail = tail_rows(lines.iter().map(String::as_str), width, max_rows);
        prop_assert_eq!(tail.len(), full.len().min(max_rows));
        prop_assert_eq!(&full[full.len() - tail.len()..], tail.as_slice());
    }

    #[test]
    fn terminal_body_fits(
        lines in prop::collection::vec("[a-z ]{0,20}", 0..10),
        input in "[a-z]{0,50}",
        width in 1u16..60,
        height in 0u16..15,
    ) {
        let mut session = ContactSession::new(&SiteConfig {
            prompt: "p %".into(),
            welcome: String::new(),
            ..SiteConfig::default()
        });
        for line in &lines {
            session.submit(line);
        }
        session.set_input(input);

        let body = terminal_body(&session, width, height);
        prop_assert!(body.rows.len() <= usize::from(height));
        if height > 0 {
            let (col, row) = body.cursor;
            prop_assert!(col < width);
            prop_assert_eq!(usize::from(row) + 1, body.rows.len());
        }
    }
}
