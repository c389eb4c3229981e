pub mod roster;

use crate::core::extract::DEFAULT_ROW_CAP;
use crate::core::fetch::{DEFAULT_JUDGE_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bojwatch")]
#[command(about = "Study-group tracker endpoints over the BOJ status page")]
pub struct ServerConfig {
    #[arg(long, default_value = "0.0.0.0", env = "BOJWATCH_HOST")]
    pub host: String,

    #[arg(long, default_value = "3000", env = "BOJWATCH_PORT")]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_JUDGE_BASE_URL, env = "BOJWATCH_JUDGE_URL")]
    pub judge_base_url: String,

    /// Fixed service timezone as hours east of UTC. Day windows are computed
    /// here, never in the host's local timezone.
    #[arg(long, default_value = "9", env = "BOJWATCH_UTC_OFFSET_HOURS")]
    pub utc_offset_hours: i32,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, env = "BOJWATCH_TIMEOUT_SECS")]
    pub request_timeout_secs: u64,

    /// Safety cap on status rows inspected per request.
    #[arg(long, default_value_t = DEFAULT_ROW_CAP)]
    pub row_cap: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ServerConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("judge_base_url", &self.judge_base_url)?;
        validate_range("utc_offset_hours", self.utc_offset_hours, -12, 14)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 60)?;
        validate_range("row_cap", self.row_cap, 1, 1000)?;
        Ok(())
    }
}
