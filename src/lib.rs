pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::backend::RestSolvedStore;
pub use config::{roster::RosterConfig, ServerConfig};
pub use core::{batch::BatchRunner, fetch::JudgeFetcher, judge::JudgeService};
pub use utils::error::{Result, TrackerError};
