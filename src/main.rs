use bojwatch::core::window::service_offset;
use bojwatch::server::{router, AppState};
use bojwatch::utils::{logger, validation::Validate};
use bojwatch::{JudgeFetcher, JudgeService, ServerConfig};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting bojwatch server");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let fetcher = JudgeFetcher::new(
        config.judge_base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let service = JudgeService::new(
        fetcher,
        service_offset(config.utc_offset_hours),
        config.row_cap,
    );
    let state = AppState {
        service: Arc::new(service),
    };

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router(state)).await?;

    Ok(())
}
