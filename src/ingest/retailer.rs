//! Retailer name detection and cleanup.

/// URL substrings of well-known stores and their display names.
const KNOWN_RETAILERS: &[(&str, &str)] = &[
    ("amazon", "Amazon"),
    ("flipkart", "Flipkart"),
    ("croma", "Croma"),
    ("reliance", "Reliance Digital"),
    ("myntra", "Myntra"),
    ("ajio", "Ajio"),
    ("snapdeal", "Snapdeal"),
    ("paytm", "Paytm Mall"),
    ("jiomart", "JioMart"),
    ("jio.com", "JioMart"),
    ("bigbasket", "BigBasket"),
    ("91mobiles", "91mobiles"),
    ("nykaa", "Nykaa"),
    ("tatacliq", "Tata CLiQ"),
    ("shopclues", "ShopClues"),
    ("limeroad", "LimeRoad"),
    ("meesho", "Meesho"),
    ("pepperfry", "Pepperfry"),
    ("urbanladder", "Urban Ladder"),
    ("fabindia", "Fabindia"),
    ("koovs", "Koovs"),
];

/// Name used when nothing better can be derived.
pub const UNKNOWN_RETAILER: &str = "Unknown";

/// Derive a retailer name from a product link.
///
/// Known stores are matched by substring; otherwise the first label of the
/// host is title-cased (`https://www.example.co.in/x` → `Example`).
#[must_use]
pub fn retailer_from_link(link: &str) -> String {
    let lower = link.trim().to_lowercase();
    if lower.is_empty() {
        return UNKNOWN_RETAILER.to_string();
    }

    if let Some((_, name)) = KNOWN_RETAILERS
        .iter()
        .find(|(needle, _)| lower.contains(needle))
    {
        return (*name).to_string();
    }

    host_label(&lower)
        .map(title_case)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_RETAILER.to_string())
}

/// Clean a retailer name reported by the upstream API (`"amazon.in"` →
/// `"Amazon"`). Falls back to the link when the name is blank.
#[must_use]
pub fn clean_retailer_name(source: Option<&str>, link: &str) -> String {
    let cleaned = source
        .map(|s| s.replace(".in", "").replace(".com", ""))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cleaned {
        Some(name) => title_case(&name),
        None => retailer_from_link(link),
    }
}

/// First DNS label of the URL host, without `www.`.
fn host_label(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map_or(url, |(_, r)| r);
    let host = rest.split(['/', '?', '#', ':']).next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    host.split('.').next().filter(|label| !label.is_empty())
}

/// Uppercase the first letter of each word and lowercase the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
