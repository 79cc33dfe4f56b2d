//! GitLab v4 REST client.
//!
//! Two read-only calls, each a single authenticated GET with a fixed
//! 10-second timeout. No retries: the first failure is returned.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use runnerscale_core::{Job, Runner, RunnerId, ScalerConfig};

use crate::error::{ClientError, ClientResult};

/// Timeout applied to every upstream request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Header GitLab reads personal and project access tokens from.
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// The two upstream operations the aggregator depends on.
pub trait RunnerApi: Send + Sync {
    /// `GET /api/v4/runners`
    fn list_runners(&self) -> impl Future<Output = ClientResult<Vec<Runner>>> + Send;

    /// `GET /api/v4/runners/:id/jobs?status=pending`
    fn list_pending_jobs(
        &self,
        runner_id: RunnerId,
    ) -> impl Future<Output = ClientResult<Vec<Job>>> + Send;
}

/// HTTP client bound to one GitLab instance and token.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitLabClient {
    /// Build a client from the scaler configuration.
    pub fn new(config: &ScalerConfig) -> ClientResult<Self> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(config: &ScalerConfig, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("runnerscale/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            // `from_lookup` already trims; hand-built configs may not.
            base_url: config.gitlab_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// The API base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        let url = format!("{}/api/v4/{path}", self.base_url);
        debug!(%url, "GitLab API request");

        let resp = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ClientError::UpstreamStatus {
                code: status.as_u16(),
                url,
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(format!("{url}: {e}")))
    }
}

impl RunnerApi for GitLabClient {
    async fn list_runners(&self) -> ClientResult<Vec<Runner>> {
        self.get_json("runners").await
    }

    async fn list_pending_jobs(&self, runner_id: RunnerId) -> ClientResult<Vec<Job>> {
        self.get_json(&format!("runners/{runner_id}/jobs?status=pending"))
            .await
    }
}
