//! Score and best command handlers.
//!
//! Implements the `score` subcommand (full scored report) and the `best`
//! subcommand (best deal plus recommendation text).

use crate::config::{ScoreConfig, Validatable};
use crate::pipeline::{
    exit_codes, output_best_deal, output_report, parse_listings_with_context, score_products,
    ScoringOutcome,
};
use anyhow::Result;

/// Run the score command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let outcome = load_and_score(&config)?;
    output_report(&outcome, &config.app, Some(&input_label(&config)))?;
    Ok(exit_code(&outcome, &config))
}

/// Run the best command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_best(config: ScoreConfig) -> Result<i32> {
    let outcome = load_and_score(&config)?;
    output_best_deal(&outcome, &config.app, Some(&input_label(&config)))?;
    Ok(exit_code(&outcome, &config))
}

fn load_and_score(config: &ScoreConfig) -> Result<ScoringOutcome> {
    config.ensure_valid()?;

    let quiet = config.app.behavior.quiet;
    let parsed = parse_listings_with_context(&config.input, &config.app.ingest, quiet)?;
    Ok(score_products(
        parsed.into_products(),
        config.query.as_deref(),
        &config.app,
    ))
}

fn input_label(config: &ScoreConfig) -> String {
    if config.reads_stdin() {
        "-".to_string()
    } else {
        config.input.display().to_string()
    }
}

fn exit_code(outcome: &ScoringOutcome, config: &ScoreConfig) -> i32 {
    if outcome.best_deal().is_none() {
        if !config.app.behavior.quiet {
            tracing::warn!("No best deal found");
        }
        if config.app.behavior.fail_if_none {
            return exit_codes::NO_BEST_DEAL;
        }
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::reports::ReportFormat;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, listings: &str, app: AppConfig) -> ScoreConfig {
        let input = dir.path().join("listings.json");
        std::fs::write(&input, listings).unwrap();
        ScoreConfig {
            input,
            query: None,
            app,
        }
    }

    #[test]
    fn test_run_score_writes_report() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out.json");
        let app = AppConfig::builder()
            .output_file(Some(out.clone()))
            .output_format(ReportFormat::Json)
            .quiet(true)
            .build();
        let config = config_for(
            &tmp,
            r#"[{"name": "A", "price": 10, "rating": 4.0}, {"name": "B", "price": 20, "rating": 4.5}]"#,
            app,
        );

        assert_eq!(run_score(config).unwrap(), exit_codes::SUCCESS);
        let report = std::fs::read_to_string(out).unwrap();
        assert!(report.contains("\"product_count\": 2"));
    }

    #[test]
    fn test_run_best_fail_if_none() {
        let tmp = TempDir::new().unwrap();
        let app = AppConfig::builder()
            .output_file(Some(tmp.path().join("best.txt")))
            .fail_if_none(true)
            .quiet(true)
            .build();
        let config = config_for(&tmp, r#"[{"name": "A", "price": 0, "rating": 4.0}]"#, app);

        assert_eq!(run_best(config).unwrap(), exit_codes::NO_BEST_DEAL);
    }

    #[test]
    fn test_run_best_without_fail_flag_succeeds() {
        let tmp = TempDir::new().unwrap();
        let app = AppConfig::builder()
            .output_file(Some(tmp.path().join("best.txt")))
            .quiet(true)
            .build();
        let config = config_for(&tmp, "[]", app);

        assert_eq!(run_best(config).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let config = ScoreConfig {
            input: PathBuf::from("/nonexistent/listings.json"),
            query: None,
            app: AppConfig::default(),
        };
        let err = run_score(config).unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }
}
