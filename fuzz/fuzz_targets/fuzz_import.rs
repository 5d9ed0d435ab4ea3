#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // ZIP extraction -> model XML parsing -> object materialization
    let _ = threemf_codec::import_from_reader(Cursor::new(data));
});
