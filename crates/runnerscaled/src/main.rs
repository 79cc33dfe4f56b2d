//! runnerscaled — the runnerscale daemon.
//!
//! Resolves the scaler configuration from the environment, builds the
//! GitLab client, and serves `/metrics` and `/healthz` until Ctrl-C.
//!
//! # Usage
//!
//! ```text
//! GITLAB_TOKEN=glpat-... GITLAB_RUNNER_TAG=shared runnerscaled --port 8080
//! ```
//!
//! | Variable | Default |
//! |---|---|
//! | `GITLAB_URL` | `https://gitlab.com` |
//! | `GITLAB_TOKEN` | empty |
//! | `PENDING_JOBS_PER_RUNNER` | `10` |
//! | `GITLAB_RUNNER_TAG` | empty |
//! | `GITLAB_RUNNER_ID` | unset (all runners) |

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use runnerscale_api::{ApiState, build_router};
use runnerscale_core::ScalerConfig;
use runnerscale_gitlab::GitLabClient;

#[derive(Parser)]
#[command(name = "runnerscaled", about = "GitLab runner metrics adapter for external autoscalers", version)]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log output format.
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = ScalerConfig::from_env();
    info!(?config, "configuration resolved");

    let client = GitLabClient::new(&config)?;
    let router = build_router(ApiState::new(config, client));

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "starting external scaler");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("runnerscaled stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,runnerscaled=debug,runnerscale=debug"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
