//! runnerscale-gitlab — GitLab v4 API access and pending-job aggregation.
//!
//! # Architecture
//!
//! ```text
//! count_matching_pending_jobs(api, tag)
//!   ├── api.list_runners()            ← failure is fatal
//!   └── for each runner
//!       ├── api.list_pending_jobs(id) ← failure skips the runner
//!       └── count jobs whose tag_list contains `tag`
//! ```
//!
//! `GitLabClient` is the production [`RunnerApi`]; tests drive the
//! aggregator through an in-memory implementation.

pub mod aggregate;
pub mod client;
pub mod error;

pub use aggregate::{PendingJobTally, SkippedRunner, count_for_runner, count_matching_pending_jobs};
pub use client::{GitLabClient, RunnerApi};
pub use error::{ClientError, ClientResult};
