#![no_main]

use imgpeek::diagnostics::locations;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        for location in locations(text) {
            assert!(!location.file.is_empty());
        }
    }
});
