#![no_main]
use deal_scorer::config::IngestConfig;
use deal_scorer::{normalize_listings, parse_listings_str, score_and_rank};
use libfuzzer_sys::fuzz_target;

/// Fuzz listing ingestion end to end.
///
/// Arbitrary documents that parse are normalized and scored, exercising
/// envelope detection, text price parsing and the scorer's handling of
/// whatever numbers come out.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(raw) = parse_listings_str(s) {
            let normalized = normalize_listings(&raw, &IngestConfig::default());
            let scored = score_and_rank(&normalized.products);
            assert!(scored.iter().all(|p| (0.0..=1.0).contains(&p.final_score)));
        }
    }
});
