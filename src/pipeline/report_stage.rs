//! Report output stage.

use super::{auto_detect_format, should_use_color, write_output, OutputTarget, PipelineError, ScoringOutcome};
use crate::config::AppConfig;
use crate::model::ScoredProduct;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportFormat, ReportMetadata};
use anyhow::Result;

fn report_config(config: &AppConfig, input: Option<&str>) -> ReportConfig {
    ReportConfig {
        explain: config.behavior.explain,
        max_items: config.output.limit,
        metadata: ReportMetadata {
            input_path: input.map(str::to_string),
        },
    }
}

fn render(
    format: ReportFormat,
    config: &AppConfig,
    products: &[ScoredProduct],
    outcome: &ScoringOutcome,
    input: Option<&str>,
) -> Result<String> {
    let reporter = create_reporter_with_options(format, should_use_color(config.output.no_color));
    reporter
        .generate(products, &outcome.summary, &report_config(config, input))
        .map_err(|e| {
            PipelineError::ReportFailed {
                source: e.into(),
            }
            .into()
        })
}

/// Output the full scored report to the configured destination.
pub fn output_report(outcome: &ScoringOutcome, config: &AppConfig, input: Option<&str>) -> Result<()> {
    let target = OutputTarget::for_config(&config.output);
    let format = auto_detect_format(config.output.format, &target);
    tracing::debug!("Writing {} report", format);

    let report = render(format, config, &outcome.products, outcome, input)?;
    write_output(&report, &target, config.behavior.quiet)
}

/// Output only the best deal and the recommendation text.
///
/// Text formats print a single line; structured formats list just the
/// best deal in their product section.
pub fn output_best_deal(
    outcome: &ScoringOutcome,
    config: &AppConfig,
    input: Option<&str>,
) -> Result<()> {
    let target = OutputTarget::for_config(&config.output);
    let format = auto_detect_format(config.output.format, &target);

    let report = match format {
        ReportFormat::Summary | ReportFormat::Auto => {
            format!("{}\n", outcome.summary.ai_recommendation)
        }
        _ => {
            let best: Vec<ScoredProduct> = outcome.best_deal().cloned().into_iter().collect();
            render(format, config, &best, outcome, input)?
        }
    };
    write_output(&report, &target, config.behavior.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductRecord;
    use crate::pipeline::score_products;
    use tempfile::TempDir;

    fn outcome() -> ScoringOutcome {
        score_products(
            vec![
                ProductRecord::new("A", 100.0, 4.0),
                ProductRecord::new("B", 50.0, 3.0),
                ProductRecord::new("C", 75.0, 4.5),
            ],
            None,
            &AppConfig::default(),
        )
    }

    #[test]
    fn test_output_report_to_file_defaults_to_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let config = AppConfig::builder().output_file(Some(path.clone())).quiet(true).build();

        output_report(&outcome(), &config, Some("listings.json")).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["products"].as_array().unwrap().len(), 3);
        assert_eq!(value["metadata"]["input"], "listings.json");
    }

    #[test]
    fn test_output_report_honors_limit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let config = AppConfig::builder()
            .output_file(Some(path.clone()))
            .limit(Some(2))
            .quiet(true)
            .build();

        let outcome = outcome();
        output_report(&outcome, &config, None).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["products"].as_array().unwrap().len(), 2);
        // counts and the best deal still cover every product
        assert_eq!(value["product_count"], 3);
        assert_eq!(value["best_deal"]["name"], "C");
    }

    #[test]
    fn test_output_best_deal_csv() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("best.csv");
        let config = AppConfig::builder()
            .output_file(Some(path.clone()))
            .output_format(ReportFormat::Csv)
            .quiet(true)
            .build();

        output_best_deal(&outcome(), &config, None).unwrap();

        let csv = std::fs::read_to_string(path).unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].starts_with("C,"));
    }

    #[test]
    fn test_output_best_deal_summary_line() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("best.txt");
        let config = AppConfig::builder()
            .output_file(Some(path.clone()))
            .output_format(ReportFormat::Summary)
            .quiet(true)
            .build();

        output_best_deal(&outcome(), &config, None).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("Best Deal: C from Unknown"));
        assert_eq!(text.lines().count(), 1);
    }
}
