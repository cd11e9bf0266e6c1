#![no_main]

use arbitrary::Arbitrary;
use folio_core::{ContactSession, Outcome, SiteConfig};
use libfuzzer_sys::fuzz_target;
use std::time::Duration;

#[derive(Debug, Arbitrary)]
enum Op {
    Submit(String),
    SubmitPending,
    Insert(char),
    Paste(String),
    Backspace,
    KeyDown,
    KeyUp,
    Advance(u32),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut session = ContactSession::new(&SiteConfig::default());

    for op in ops.into_iter().take(256) {
        let before = session.transcript().lines().to_vec();
        let outcome = match op {
            Op::Submit(line) => Some(session.submit(&line)),
            Op::SubmitPending => Some(session.submit_pending()),
            Op::Insert(c) => {
                session.insert_char(c);
                None
            }
            Op::Paste(text) => {
                session.insert_str(&text);
                None
            }
            Op::Backspace => {
                session.backspace();
                None
            }
            Op::KeyDown => {
                session.key_down();
                None
            }
            Op::KeyUp => {
                session.key_up();
                None
            }
            Op::Advance(ms) => {
                session.advance(Duration::from_millis(u64::from(ms)));
                None
            }
        };

        let after = session.transcript().lines();
        match outcome {
            Some(Outcome::Cleared) => assert!(after.is_empty()),
            Some(_) => {
                // History is append-only outside `clear`.
                assert!(after.len() >= before.len() + 2);
                assert_eq!(&after[..before.len()], before.as_slice());
            }
            None => assert_eq!(after, before.as_slice()),
        }
    }
});
