//! Scaler configuration, resolved from environment variables.
//!
//! Every key has a fallback, so resolution never fails: a missing or
//! malformed value quietly reverts to its default and a bad token only
//! shows up later as an upstream error.

use std::fmt;
use std::num::NonZeroU64;

use tracing::warn;

use crate::types::RunnerId;

pub const ENV_GITLAB_URL: &str = "GITLAB_URL";
pub const ENV_GITLAB_TOKEN: &str = "GITLAB_TOKEN";
pub const ENV_JOBS_PER_RUNNER: &str = "PENDING_JOBS_PER_RUNNER";
pub const ENV_RUNNER_TAG: &str = "GITLAB_RUNNER_TAG";
pub const ENV_RUNNER_ID: &str = "GITLAB_RUNNER_ID";

pub const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";
pub const DEFAULT_JOBS_PER_RUNNER: NonZeroU64 = NonZeroU64::new(10).unwrap();

/// Immutable settings shared by the client, aggregator, and handlers.
#[derive(Clone, PartialEq, Eq)]
pub struct ScalerConfig {
    /// API base URL, without a trailing slash.
    pub gitlab_url: String,
    /// Sent as `PRIVATE-TOKEN`. May be empty.
    pub token: String,
    /// How many pending jobs one runner is expected to absorb.
    pub jobs_per_runner: NonZeroU64,
    /// Jobs count only if their tag list contains this exact string.
    pub runner_tag: String,
    /// When set, only this runner is queried and the runner listing is skipped.
    pub runner_id: Option<RunnerId>,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            gitlab_url: DEFAULT_GITLAB_URL.to_string(),
            token: String::new(),
            jobs_per_runner: DEFAULT_JOBS_PER_RUNNER,
            runner_tag: String::new(),
            runner_id: None,
        }
    }
}

impl ScalerConfig {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let gitlab_url = lookup(ENV_GITLAB_URL)
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_GITLAB_URL.to_string());

        let jobs_per_runner = lookup(ENV_JOBS_PER_RUNNER)
            .and_then(|v| parse_jobs_per_runner(&v))
            .unwrap_or(DEFAULT_JOBS_PER_RUNNER);

        let runner_id = lookup(ENV_RUNNER_ID).and_then(|v| {
            let v = v.trim();
            if v.is_empty() {
                return None;
            }
            match v.parse::<RunnerId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!(value = v, "ignoring non-numeric {ENV_RUNNER_ID}");
                    None
                }
            }
        });

        Self {
            gitlab_url,
            token: lookup(ENV_GITLAB_TOKEN).unwrap_or_default(),
            jobs_per_runner,
            runner_tag: lookup(ENV_RUNNER_TAG).unwrap_or_default(),
            runner_id,
        }
    }
}

/// Parse a jobs-per-runner value. Empty, non-numeric, negative, and zero
/// values are all rejected.
fn parse_jobs_per_runner(value: &str) -> Option<NonZeroU64> {
    value.trim().parse::<NonZeroU64>().ok()
}

impl fmt::Debug for ScalerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("ScalerConfig")
            .field("gitlab_url", &self.gitlab_url)
            .field("token", &token)
            .field("jobs_per_runner", &self.jobs_per_runner)
            .field("runner_tag", &self.runner_tag)
            .field("runner_id", &self.runner_id)
            .finish()
    }
}
