#![no_main]

use folio_core::{ContactSession, SiteConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    // Parsing must never panic; anything accepted must pass validation.
    let Ok(config) = SiteConfig::from_json_str(text) else {
        return;
    };
    assert!(config.validate().is_empty());

    let mut session = ContactSession::new(&config);
    for line in ["help", "whoami", "github", "leetcode", "linkedin", "nope", "clear"] {
        session.submit(line);
    }
    assert!(session.transcript().is_empty());
});
