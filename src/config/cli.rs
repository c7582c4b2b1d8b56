use crate::config::toml_config::TrackerConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "courier-tracker")]
#[command(about = "Track parcels across Greek courier services")]
pub struct CliConfig {
    /// Tracking numbers to look up
    #[arg(required = true, value_name = "NUMBERS")]
    pub tracking_numbers: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Override http.timeout_seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Override tracker.concurrent_requests
    #[arg(long)]
    pub concurrent_requests: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入配置檔 (若有) 並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<TrackerConfig> {
        let mut config = match &self.config {
            Some(path) => TrackerConfig::from_file(path)?,
            None => TrackerConfig::default(),
        };

        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = timeout;
        }
        if let Some(concurrent) = self.concurrent_requests {
            config.tracker.concurrent_requests = concurrent;
        }

        Ok(config)
    }
}
