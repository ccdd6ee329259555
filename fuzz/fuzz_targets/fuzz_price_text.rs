#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = deal_scorer::parse_price_text(s, 83.0);
        let _ = deal_scorer::ingest::parse_rating_text(s);
    }
});
