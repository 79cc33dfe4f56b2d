//! Route handlers.
//!
//! `/metrics` runs the full pipeline on every call; nothing is cached
//! between requests.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, info};

use runnerscale_core::{MetricSample, desired_replicas};
use runnerscale_gitlab::PendingJobTally;

use crate::ApiState;

/// GET /metrics
pub async fn metrics(State(state): State<ApiState>) -> Response {
    let tally = match PendingJobTally::for_config(state.client.as_ref(), &state.config).await {
        Ok(tally) => tally,
        Err(e) => {
            error!(error = %e, "failed to fetch jobs");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to fetch jobs: {e}"),
            )
                .into_response();
        }
    };

    let desired = desired_replicas(tally.matched, state.config.jobs_per_runner);
    info!(
        pending_jobs = tally.matched,
        desired_runners = desired,
        runners_polled = tally.runners_polled,
        skipped_runners = tally.skipped.len(),
        "computed desired runners"
    );

    Json(vec![MetricSample::desired_runners(desired)]).into_response()
}

/// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}
