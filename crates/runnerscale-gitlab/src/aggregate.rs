//! Pending-job aggregation across runners.
//!
//! The runner listing is load-bearing: if it fails there is nothing to
//! aggregate and the error propagates. A failed job listing for one
//! runner only removes that runner's contribution, and is recorded as a
//! [`SkippedRunner`] so callers can report it.

use tracing::{debug, warn};

use runnerscale_core::{Job, RunnerId, ScalerConfig};

use crate::client::RunnerApi;
use crate::error::ClientResult;

/// A runner whose pending jobs could not be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRunner {
    pub runner_id: RunnerId,
    pub reason: String,
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingJobTally {
    /// Pending jobs that passed the tag filter, summed over all runners.
    pub matched: u64,
    /// Runners whose job listing succeeded.
    pub runners_polled: usize,
    pub skipped: Vec<SkippedRunner>,
}

impl PendingJobTally {
    /// Aggregate according to the configuration: a pinned runner if one
    /// is set, otherwise every runner the API lists.
    pub async fn for_config<A: RunnerApi>(api: &A, config: &ScalerConfig) -> ClientResult<Self> {
        match config.runner_id {
            Some(id) => count_for_runner(api, id, &config.runner_tag).await,
            None => count_matching_pending_jobs(api, &config.runner_tag).await,
        }
    }

    fn add_jobs(mut self, jobs: &[Job], tag: &str) -> Self {
        self.matched += count_tagged(jobs, tag);
        self.runners_polled += 1;
        self
    }

    fn add_all_jobs(mut self, jobs: &[Job]) -> Self {
        self.matched += jobs.len() as u64;
        self.runners_polled += 1;
        self
    }

    fn skip(mut self, runner_id: RunnerId, reason: String) -> Self {
        self.skipped.push(SkippedRunner { runner_id, reason });
        self
    }
}

/// Count pending jobs tagged `tag` across every runner the API lists.
pub async fn count_matching_pending_jobs<A: RunnerApi>(
    api: &A,
    tag: &str,
) -> ClientResult<PendingJobTally> {
    let runners = api.list_runners().await?;
    debug!(runners = runners.len(), tag, "aggregating pending jobs");

    let mut tally = PendingJobTally::default();
    for runner in &runners {
        tally = match api.list_pending_jobs(runner.id).await {
            Ok(jobs) => tally.add_jobs(&jobs, tag),
            Err(e) => {
                warn!(runner_id = runner.id, error = %e, "skipping runner: failed to list pending jobs");
                tally.skip(runner.id, e.to_string())
            }
        };
    }

    Ok(tally)
}

/// Count pending jobs on a single, known runner.
///
/// With a non-empty `tag` only jobs carrying it count; with an empty
/// `tag` every pending job on the runner counts.
///
/// There is no runner listing to fall back on, so a failure here is
/// returned rather than skipped.
pub async fn count_for_runner<A: RunnerApi>(
    api: &A,
    runner_id: RunnerId,
    tag: &str,
) -> ClientResult<PendingJobTally> {
    let jobs = api.list_pending_jobs(runner_id).await?;
    let tally = PendingJobTally::default();
    if tag.is_empty() {
        debug!(runner_id, jobs = jobs.len(), "pinned runner without tag filter");
        Ok(tally.add_all_jobs(&jobs))
    } else {
        Ok(tally.add_jobs(&jobs, tag))
    }
}

/// Jobs count once no matter how many of their tags match.
fn count_tagged(jobs: &[Job], tag: &str) -> u64 {
    jobs.iter().filter(|job| job.has_tag(tag)).count() as u64
}
