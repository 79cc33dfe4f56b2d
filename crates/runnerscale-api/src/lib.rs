//! runnerscale-api — HTTP surface for the external autoscaler.
//!
//! # Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/metrics` | `[{"metricName":"desired_runners","metricValue":N}]` |
//! | GET | `/healthz` | Static `ok`, independent of GitLab |

pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use runnerscale_core::ScalerConfig;
use runnerscale_gitlab::GitLabClient;

/// Shared, read-only state for handlers.
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<ScalerConfig>,
    pub client: Arc<GitLabClient>,
}

impl ApiState {
    pub fn new(config: ScalerConfig, client: GitLabClient) -> Self {
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
        }
    }
}

/// Build the router serving `/metrics` and `/healthz`.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/metrics", get(handlers::metrics))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
