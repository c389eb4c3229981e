use bojwatch::core::window::service_offset;
use bojwatch::utils::logger;
use bojwatch::{BatchRunner, JudgeFetcher, JudgeService, RestSolvedStore, RosterConfig};
use clap::Parser;
use std::time::Duration;

/// Nightly job: re-derive every member's solved flag from the judge's status
/// page and write it back to the group backend.
#[derive(Debug, Parser)]
#[command(name = "update_solved")]
#[command(about = "Walk the member roster and refresh solved flags")]
struct Args {
    #[arg(long, default_value = "roster.toml", env = "BOJWATCH_ROSTER")]
    roster: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = RosterConfig::from_file(&args.roster)?;
    tracing::info!(roster = %args.roster, members = config.members.len(), "roster loaded");

    let fetcher = JudgeFetcher::new(
        config.judge.base_url.clone(),
        Duration::from_secs(config.judge.timeout_seconds),
    )?;
    let service = JudgeService::new(
        fetcher,
        service_offset(config.judge.utc_offset_hours),
        config.judge.row_cap,
    );
    let store = RestSolvedStore::new(&config.backend.base_url, &config.backend.service_key);
    let runner = BatchRunner::new(
        service,
        store,
        Duration::from_millis(config.batch.member_delay_ms),
    );

    let summary = runner.run(&config.members).await;

    println!(
        "✅ Roster walk finished: {} updated ({} solved), {} failed",
        summary.updated, summary.solved, summary.failed
    );

    if summary.failed > 0 {
        std::process::exit(2);
    }
    Ok(())
}
