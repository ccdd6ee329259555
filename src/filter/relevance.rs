//! Query relevance: accessory filtering and deterministic relevance ranking.

use crate::model::ProductRecord;

/// Keywords marking a listing as an accessory rather than the product itself.
pub const ACCESSORY_KEYWORDS: &[&str] = &[
    "case",
    "cover",
    "screen guard",
    "screen protector",
    "tempered glass",
    "charger",
    "cable",
    "adapter",
    "skin",
    "sticker",
    "holder",
    "mount",
    "stand",
    "grip",
    "earphone",
    "headphone",
    "earbuds",
    "power bank",
    "charging pad",
    "wireless charger",
    "back cover",
    "flip cover",
    "protective case",
    "shell",
    "bumper case",
    "pouch",
    "sleeve",
];

/// Relevance weight of fuzzy title similarity.
const SIMILARITY_WEIGHT: f64 = 0.6;
/// Relevance weight of the fraction of query tokens found in the title.
const OVERLAP_WEIGHT: f64 = 0.3;
/// Bonus for listings that link to a product page.
const URL_BONUS: f64 = 0.05;
/// Bonus for listings with a usable rating.
const RATING_BONUS: f64 = 0.05;
/// Scores within this distance of the best are treated as tied.
const NEAR_TIE: f64 = 0.02;

/// Whether `product_name` is the thing searched for.
///
/// Every whitespace-separated token of the query must occur in the name,
/// and the name must not contain an accessory keyword.
#[must_use]
pub fn is_relevant_product(product_name: &str, query: &str) -> bool {
    let name = product_name.to_lowercase();
    let query = query.to_lowercase();

    if !query.split_whitespace().all(|token| name.contains(token)) {
        return false;
    }

    !ACCESSORY_KEYWORDS.iter().any(|kw| name.contains(kw))
}

/// Keep only relevant products.
///
/// When nothing would survive, the input is returned unchanged so a
/// search never goes empty because of the filter.
#[must_use]
pub fn filter_relevant(products: Vec<ProductRecord>, query: &str) -> Vec<ProductRecord> {
    let total = products.len();
    let (relevant, rejected): (Vec<_>, Vec<_>) = products
        .into_iter()
        .partition(|p| is_relevant_product(&p.name, query));

    if relevant.is_empty() && !rejected.is_empty() {
        tracing::warn!("Relevance filter for '{query}' rejected every product; keeping all {total}");
        return rejected;
    }

    tracing::debug!(
        "Relevance filter kept {}/{} products for '{query}'",
        relevant.len(),
        total
    );
    relevant
}

/// Relevance of one product title to a query (higher is better).
#[must_use]
pub fn relevance_score(query: &str, product: &ProductRecord) -> f64 {
    let q = query.trim().to_lowercase();
    let name = product.name.to_lowercase();

    let similarity = strsim::normalized_levenshtein(&q, &name);

    let q_tokens = tokens(&q);
    let name_tokens = tokens(&name);
    let overlap = if q_tokens.is_empty() {
        0.0
    } else {
        let hits = q_tokens.iter().filter(|t| name_tokens.contains(*t)).count();
        hits as f64 / q_tokens.len() as f64
    };

    let mut score = SIMILARITY_WEIGHT.mul_add(similarity, OVERLAP_WEIGHT * overlap);
    if !product.url.is_empty() {
        score += URL_BONUS;
    }
    if product.rating > 0.0 {
        score += RATING_BONUS;
    }
    score
}

/// The single most relevant product.
///
/// Near-ties are resolved in favor of the cheaper product.
#[must_use]
pub fn most_relevant<'a>(query: &str, products: &'a [ProductRecord]) -> Option<&'a ProductRecord> {
    let scored: Vec<(f64, &ProductRecord)> = products
        .iter()
        .map(|p| (relevance_score(query, p), p))
        .collect();

    let best_score = scored
        .iter()
        .map(|(s, _)| *s)
        .max_by(f64::total_cmp)?;

    scored
        .into_iter()
        .filter(|(s, _)| best_score - s < NEAR_TIE)
        .map(|(_, p)| p)
        .reduce(|best, p| if p.price < best.price { p } else { best })
}

/// The `k` most relevant products, best first.
///
/// Products with a URL and a rating are preferred over incomplete ones
/// regardless of score.
#[must_use]
pub fn top_k_relevant(query: &str, products: &[ProductRecord], k: usize) -> Vec<ProductRecord> {
    let mut scored: Vec<(f64, &ProductRecord)> = products
        .iter()
        .map(|p| (relevance_score(query, p), p))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let (complete, partial): (Vec<_>, Vec<_>) = scored
        .into_iter()
        .map(|(_, p)| p)
        .partition(|p| is_complete(p));

    complete
        .into_iter()
        .chain(partial)
        .take(k)
        .cloned()
        .collect()
}

fn is_complete(p: &ProductRecord) -> bool {
    !p.url.is_empty() && p.rating > 0.0 && p.has_valid_price()
}

fn tokens(s: &str) -> Vec<&str> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}
