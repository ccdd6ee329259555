//! Price and rating extraction from free-form listing text.

use regex::Regex;
use std::sync::LazyLock;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("static regex"));

/// Parse a displayed price such as `"₹1,23,999"`, `"from ₹450"` or
/// `"₹12,999 - ₹15,999"` into a number.
///
/// Thousands separators (western and Indian grouping) are ignored, the
/// lower bound of a range is taken, and Devanagari digits are accepted.
/// A price quoted in dollars (contains `$` but not `₹`) is converted with
/// `usd_to_inr`.
///
/// Returns `None` when the text holds no number.
#[must_use]
pub fn parse_price_text(text: &str, usd_to_inr: f64) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .map(ascii_digit)
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let value: f64 = FIRST_NUMBER.find(&cleaned)?.as_str().parse().ok()?;

    if cleaned.contains('$') && !cleaned.contains('₹') {
        tracing::debug!("USD price detected: {text}, converting at {usd_to_inr}");
        return Some(value * usd_to_inr);
    }
    Some(value)
}

/// Parse a rating such as `"4.5"`, `"4.3 out of 5 stars"` or `"Rated 4"`.
#[must_use]
pub fn parse_rating_text(text: &str) -> Option<f64> {
    FIRST_NUMBER.find(text)?.as_str().parse().ok()
}

/// Map Devanagari digits (U+0966 - U+096F) to ASCII.
fn ascii_digit(c: char) -> char {
    match c {
        '\u{0966}'..='\u{096F}' => {
            char::from_digit(c as u32 - 0x0966, 10).unwrap_or(c)
        }
        '\u{00A0}' => ' ',
        _ => c,
    }
}
