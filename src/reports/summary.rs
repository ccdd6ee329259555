//! Summary and table report generators for shell output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{DealLabel, ScoredProduct, SearchSummary};
use crate::summary::format_price;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn label_color(label: DealLabel) -> &'static str {
    match label {
        DealLabel::ExcellentDeal => "green",
        DealLabel::GoodValue => "cyan",
        DealLabel::Fair => "yellow",
        DealLabel::ConsiderWaiting => "red",
    }
}

const fn plural(n: usize) -> &'static str {
    if n == 1 {
        "product"
    } else {
        "products"
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        products: &[ScoredProduct],
        summary: &SearchSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        let title = summary
            .query
            .as_deref()
            .map_or_else(|| "Deal Summary".to_string(), |q| format!("Deal Summary: {q}"));
        lines.push(self.color(&title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {} {} across {} platforms",
            self.color("Found:", "cyan"),
            summary.product_count,
            plural(summary.product_count),
            summary.platform_count()
        ));
        if let Some(stats) = summary.stats {
            lines.push(format!(
                "{}  ₹{} - ₹{} (avg ₹{})",
                self.color("Prices:", "cyan"),
                format_price(stats.low),
                format_price(stats.high),
                format_price(stats.avg)
            ));
        }

        if let Some(best) = &summary.best_deal {
            lines.push(String::new());
            lines.push(self.color("Best Deal:", "bold"));
            lines.push(format!("  {} ({})", best.name(), best.retailer()));
            lines.push(format!(
                "  ₹{} | {:.1}/5 | score {:.2} | {}",
                format_price(best.price()),
                best.rating(),
                best.final_score,
                self.color(best.recommendation.as_str(), label_color(best.recommendation))
            ));
            if let Some(discount) = best.discount() {
                lines.push(format!("  {discount}"));
            }
            lines.push(format!(
                "  {} {}",
                self.color("Verdict:", "dim"),
                best.recommendation.advice()
            ));
        }

        if !summary.platforms.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Platforms:", "bold"));
            let width = summary
                .platforms
                .iter()
                .map(|p| p.platform.width())
                .max()
                .unwrap_or(0);
            for platform in &summary.platforms {
                let count = platform.products.len();
                let from = platform
                    .stats
                    .map_or_else(|| "-".to_string(), |s| format!("from ₹{}", format_price(s.low)));
                lines.push(format!(
                    "  {}  {count} {}, {from}",
                    pad_right(&platform.platform, width),
                    plural(count)
                ));
            }
        }

        if config.explain && !products.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Scores:", "bold"));
            for p in products.iter().take(config.item_limit(products.len())) {
                lines.push(format!("  {}: {}", p.name(), p.summary()));
            }
        }

        lines.push(String::new());
        lines.push(summary.ai_recommendation.clone());

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

// ============================================================================
// Table reporter
// ============================================================================

/// Maximum display width of the product name column.
const NAME_WIDTH: usize = 40;

/// Aligned-table reporter for terminal output
pub struct TableReporter {
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate(
        &self,
        products: &[ScoredProduct],
        summary: &SearchSummary,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let shown = &products[..config.item_limit(products.len())];

        let rows: Vec<[String; 7]> = shown
            .iter()
            .enumerate()
            .map(|(i, p)| {
                [
                    (i + 1).to_string(),
                    truncate(p.name(), NAME_WIDTH),
                    p.retailer().to_string(),
                    format!("₹{}", format_price(p.price())),
                    format!("{:.1}", p.rating()),
                    format!("{:.2}", p.final_score),
                    p.recommendation.to_string(),
                ]
            })
            .collect();

        let headers = ["#", "Product", "Retailer", "Price", "Rating", "Score", "Verdict"];
        let mut widths = headers.map(UnicodeWidthStr::width);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }

        let mut lines = Vec::with_capacity(rows.len() + 3);
        let header_line = headers
            .iter()
            .zip(widths)
            .map(|(h, w)| pad_right(h, w))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(self.color(header_line.trim_end(), "bold"));
        let rule_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        lines.push(self.color("─".repeat(rule_width).as_str(), "dim"));

        for (row, product) in rows.iter().zip(shown) {
            let mut cells: Vec<String> = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(col, (cell, w))| match col {
                    // numeric columns are right-aligned
                    0 | 3 | 4 | 5 => pad_left(cell, w),
                    _ => pad_right(cell, w),
                })
                .collect();
            if let Some(verdict) = cells.last_mut() {
                *verdict = self.color(verdict.trim_end(), label_color(product.recommendation));
            }
            lines.push(cells.join("  "));
        }

        if shown.len() < products.len() {
            lines.push(self.color(
                &format!("... {} more", products.len() - shown.len()),
                "dim",
            ));
        }

        lines.push(String::new());
        lines.push(summary.ai_recommendation.clone());

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(pad))
}

fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(pad))
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
