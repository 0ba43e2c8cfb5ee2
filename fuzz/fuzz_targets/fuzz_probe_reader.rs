#![no_main]

use imgpeek::probe_reader;
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if let Ok(info) = probe_reader(Cursor::new(data)) {
        assert!(info.width > 0 && info.height > 0);
    }
});
