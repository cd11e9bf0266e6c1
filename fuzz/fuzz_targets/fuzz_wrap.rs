#![no_main]

use folio_core::{ContactSession, SiteConfig};
use folio_tui::screens::contact::terminal_body;
use folio_tui::wrap::{display_width, wrap_break_all};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if text.len() > 2048 {
        return;
    }

    for width in [1, 2, 10, 40, 80] {
        let rows = wrap_break_all(text, width);
        assert!(!rows.is_empty());
        for row in &rows {
            let w = display_width(row);
            assert!(
                w <= width || row.chars().count() == 1,
                "row exceeds width {width}: width={w} {row:?}"
            );
        }
    }

    let mut session = ContactSession::new(&SiteConfig::default());
    session.submit(text);
    session.set_input(text);
    for (width, height) in [(1, 1), (10, 3), (60, 20)] {
        let body = terminal_body(&session, width, height);
        assert!(body.rows.len() <= usize::from(height));
        assert!(body.cursor.0 < width);
    }
});
