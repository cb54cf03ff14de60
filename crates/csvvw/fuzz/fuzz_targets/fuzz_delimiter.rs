//! Fuzz target for delimiter detection and parsing.

#![no_main]

use csvvw::input::detect_delimiter;
use csvvw::Delimiter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(d) = detect_delimiter(data) {
        assert!(b"\t,;|".contains(&d));
    }

    if let Ok(s) = std::str::from_utf8(data) {
        let _ = s.parse::<Delimiter>();
    }
});
