use anyhow::{Context, Result};
use clap::Args;
use common::{init_logging, LogFormat, LoggingConfig};
use std::path::PathBuf;
use tracing::Level;

use crate::config::DemoConfig;

/// Flags accepted by both demo binaries
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// TOML file overriding the built-in demo inputs
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print one JSON object per scenario instead of the text report
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value_t = Level::WARN)]
    pub log_level: Level,

    /// Emit logs (stderr) as JSON
    #[arg(long, default_value_t = false)]
    pub log_json: bool,
}

impl CommonArgs {
    pub fn init_logging(&self) -> Result<()> {
        let format = if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        };
        init_logging(
            LoggingConfig::default()
                .with_level(self.log_level)
                .with_format(format),
        )
        .context("failed to initialise logging")
    }

    /// Config file contents, or the built-in demo when no file was given
    pub fn load_config(&self) -> Result<DemoConfig> {
        match &self.config {
            Some(path) => DemoConfig::load(path),
            None => Ok(DemoConfig::default()),
        }
    }
}
