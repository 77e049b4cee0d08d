use std::future::Future;

use anyhow::Context;
use clap::Parser;
use jiten_config::Config;
use jiten_config::log::LogConfig;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod run;

use self::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::new(),
    };
    init_tracing(&config.log);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    run_until(shutdown, run::run(cli.site, &cli.urls, &config)).await
}

async fn run_until(
    shutdown: impl Future<Output = ()>,
    work: impl Future<Output = anyhow::Result<()>>,
) -> anyhow::Result<()> {
    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            Ok(())
        }
        result = work => result,
    }
}

fn init_tracing(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shutdown_wins_over_pending_work() {
        let work = std::future::pending::<anyhow::Result<()>>();
        assert!(run_until(async {}, work).await.is_ok());
    }

    #[tokio::test]
    async fn test_work_error_is_returned() {
        let shutdown = std::future::pending::<()>();
        let work = async { anyhow::bail!("boom") };
        let err = run_until(shutdown, work).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
