use bojwatch::domain::ports::SolvedStore;
use bojwatch::utils::logger;
use bojwatch::{RestSolvedStore, RosterConfig};
use clap::Parser;

/// Daily cutoff job: record penalties for members whose flag is still false,
/// then reset every flag for the new day.
#[derive(Debug, Parser)]
#[command(name = "update_punishments")]
#[command(about = "Apply penalty bookkeeping and reset solved flags")]
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
    let store = RestSolvedStore::new(&config.backend.base_url, &config.backend.service_key);

    match store.apply_penalties().await {
        Ok(()) => {
            tracing::info!("penalties recorded and flags reset");
            println!("✅ Punishments updated and solved flags reset.");
            Ok(())
        }
        Err(e) => {
            tracing::error!("penalty update failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
