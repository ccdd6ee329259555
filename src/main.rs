//! deal-scorer: rank shopping search results by price and rating.
//!
//! Reads product listings (a JSON array or a shopping-results envelope),
//! scores every listing, picks the best deal and prints a report.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use deal_scorer::{
    cli,
    config::{load_or_default, AppConfig, ConfigPreset, ScoreConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput:",
        "\n  JSON array of listings, or an object with `shopping_results` / `products`",
        "\n\nOutput Formats:",
        "\n  json, csv, summary, table"
    )
}

#[derive(Parser)]
#[command(name = "deal-scorer")]
#[command(version, long_version = build_long_version())]
#[command(about = "Score shopping results and pick the best deal", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  No best deal found (with --fail-if-none)
    3  Error occurred

EXAMPLES:
    # Score a saved search response
    deal-scorer score results.json --query \"iphone 14\"

    # Best deal only, from stdin
    cat results.json | deal-scorer best - --fail-if-none

    # Price-first scoring, CSV for a spreadsheet
    deal-scorer score results.json --preset budget -o csv -O deals.csv")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "DEAL_SCORER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments shared by `score` and `best`
#[derive(Parser)]
struct InputArgs {
    /// Listing document (JSON), or `-` for stdin
    input: PathBuf,

    /// Search query the listings answer (enables relevance filters)
    #[arg(long)]
    query: Option<String>,

    /// Output format (auto: summary on a terminal, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Named preset (default, budget, quality, strict)
    #[arg(long)]
    preset: Option<String>,

    /// Weight of the price component (rating weight becomes 1 - W)
    #[arg(long, value_name = "W")]
    price_weight: Option<f64>,

    /// Minimum rating (exclusive) for best-deal candidates
    #[arg(long, value_name = "R")]
    min_rating: Option<f64>,

    /// Drop accessories and listings missing query words
    #[arg(long)]
    relevance: bool,

    /// Drop listings priced outside the interquartile band
    #[arg(long)]
    drop_outliers: bool,

    /// Keep only the K most relevant listings (needs --query)
    #[arg(long, value_name = "K")]
    top_k: Option<usize>,

    /// Exit with code 1 when no best deal can be picked
    #[arg(long)]
    fail_if_none: bool,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Sort products best first instead of input order
    #[arg(long)]
    sort: bool,

    /// Show the score breakdown for every product
    #[arg(long)]
    explain: bool,

    /// List at most N products in the report
    #[arg(long, value_name = "N")]
    limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every listing and report the results
    Score(ScoreArgs),

    /// Print only the best deal and the recommendation
    Best(InputArgs),

    /// Configuration file utilities
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Apply a named preset before showing
        #[arg(long)]
        preset: Option<String>,
    },
    /// Print the JSON schema for config files
    Schema {
        /// Write the schema to a file instead of stdout
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },
    /// Create .deal-scorer.yaml in the current directory
    Init {
        /// Write the commented example with every option
        #[arg(long)]
        full: bool,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show config search paths and the active file
    Discover,
    /// List the named presets
    Presets,
}

/// Layer config file, preset and CLI flags into one config.
fn build_app_config(
    cli: &Cli,
    args: &InputArgs,
    sort: bool,
    explain: bool,
    limit: Option<usize>,
) -> Result<AppConfig> {
    let (mut config, loaded_from) = load_or_default(cli.config.as_deref());
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    if let Some(name) = &args.preset {
        config.merge(&AppConfig::from_preset(name.parse::<ConfigPreset>()?));
    }

    let mut overrides = AppConfig::builder()
        .relevance(args.relevance)
        .drop_outliers(args.drop_outliers)
        .output_format(args.output)
        .output_file(args.output_file.clone())
        .no_color(cli.no_color)
        .sort(sort)
        .limit(limit)
        .quiet(cli.quiet)
        .fail_if_none(args.fail_if_none)
        .build();
    overrides.filtering.top_k = args.top_k;
    overrides.behavior.explain = explain;
    config.merge(&overrides);

    // Explicit numeric flags win even when they equal a default.
    if let Some(w) = args.price_weight {
        config.scoring.price_weight = w;
        config.scoring.rating_weight = 1.0 - w;
    }
    if let Some(r) = args.min_rating {
        config.selection.min_rating = r;
    }
    Ok(config)
}

fn score_config(
    cli: &Cli,
    args: &InputArgs,
    sort: bool,
    explain: bool,
    limit: Option<usize>,
) -> Result<ScoreConfig> {
    Ok(ScoreConfig {
        input: args.input.clone(),
        query: args.query.clone(),
        app: build_app_config(cli, args, sort, explain, limit)?,
    })
}

fn exit_with(code: i32) {
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Score(args) => {
            let config = score_config(cli, &args.input, args.sort, args.explain, args.limit)?;
            exit_with(cli::run_score(config)?);
            Ok(())
        }

        Commands::Best(args) => {
            let config = score_config(cli, args, false, false, None)?;
            exit_with(cli::run_best(config)?);
            Ok(())
        }

        Commands::Config { action } => {
            let mut stdout = io::stdout().lock();
            match action {
                ConfigAction::Show { preset } => {
                    let (mut config, loaded_from) = load_or_default(cli.config.as_deref());
                    if let Some(name) = preset {
                        config.merge(&AppConfig::from_preset(name.parse::<ConfigPreset>()?));
                    }
                    cli::run_config_show(&config, loaded_from.as_deref(), &mut stdout)
                }
                ConfigAction::Schema { output } => {
                    cli::run_config_schema(output.as_deref(), &mut stdout)
                }
                ConfigAction::Init { full, force } => {
                    let dir = std::env::current_dir().context("cannot determine current directory")?;
                    let path = cli::run_config_init(&dir, *full, *force)?;
                    tracing::info!("Created {}", path.display());
                    Ok(())
                }
                ConfigAction::Discover => cli::run_config_discover(cli.config.as_deref(), &mut stdout),
                ConfigAction::Presets => cli::run_config_presets(&mut stdout),
            }
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "deal-scorer", &mut io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run(&cli) {
        tracing::error!("{err:#}");
        std::process::exit(exit_codes::ERROR);
    }
}
