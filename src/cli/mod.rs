//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod config;
mod score;

pub use config::{
    run_config_discover, run_config_init, run_config_presets, run_config_schema, run_config_show,
    INIT_FILE_NAME,
};
pub use score::{run_best, run_score};

// Re-export config types used by handlers
pub use crate::config::{AppConfig, ScoreConfig};
