//! runnerscale-core — shared types for the runnerscale adapter.
//!
//! Holds the immutable [`ScalerConfig`] resolved from the environment at
//! startup, the CI records decoded from the GitLab API, and the pure
//! replica calculation that turns a pending-job count into the
//! `desired_runners` metric.

pub mod config;
pub mod replicas;
pub mod types;

pub use config::ScalerConfig;
pub use replicas::desired_replicas;
pub use types::*;
