//! Domain types for the runnerscale pipeline.
//!
//! `Runner` and `Job` mirror the subset of the GitLab v4 API payloads the
//! aggregator reads. `MetricSample` is the only thing the adapter emits.
//! None of these outlive a single `/metrics` request.

use serde::{Deserialize, Serialize};

/// Name of the single metric exposed to the autoscaler.
pub const DESIRED_RUNNERS_METRIC: &str = "desired_runners";

/// Identifier of a runner as reported by the CI API.
pub type RunnerId = u64;

// ── Upstream records ───────────────────────────────────────────────

/// A CI execution agent, from `GET /api/v4/runners`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runner {
    pub id: RunnerId,
}

/// A CI job, from `GET /api/v4/runners/:id/jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub status: String,
    /// Tags the job requested. GitLab omits the field on some job kinds.
    #[serde(default)]
    pub tag_list: Vec<String>,
}

impl Job {
    /// Whether the job carries exactly `tag` (case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_list.iter().any(|t| t == tag)
    }
}

// ── Output ─────────────────────────────────────────────────────────

/// One entry of the `/metrics` response array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    pub metric_name: String,
    pub metric_value: u64,
}

impl MetricSample {
    /// Build the `desired_runners` sample.
    pub fn desired_runners(value: u64) -> Self {
        Self {
            metric_name: DESIRED_RUNNERS_METRIC.to_string(),
            metric_value: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_decodes_tag_list() {
        let job: Job = serde_json::from_str(
            r#"{"id":7,"status":"pending","tag_list":["docker","shared"],"name":"build"}"#,
        )
        .unwrap();
        assert_eq!(job.id, 7);
        assert_eq!(job.tag_list, vec!["docker", "shared"]);
    }

    #[test]
    fn job_without_tag_list_has_no_tags() {
        let job: Job = serde_json::from_str(r#"{"id":1,"status":"pending"}"#).unwrap();
        assert!(job.tag_list.is_empty());
        assert!(!job.has_tag(""));
    }

    #[test]
    fn has_tag_is_exact_match() {
        let job = Job {
            id: 1,
            status: "pending".to_string(),
            tag_list: vec!["docker".to_string(), "shared".to_string()],
        };
        assert!(job.has_tag("shared"));
        assert!(!job.has_tag("linux"));
        assert!(!job.has_tag("Shared"));
        assert!(!job.has_tag("share"));
    }

    #[test]
    fn runner_ignores_extra_fields() {
        let runners: Vec<Runner> = serde_json::from_str(
            r#"[{"id":1,"description":"a","active":true},{"id":2,"paused":false}]"#,
        )
        .unwrap();
        assert_eq!(runners, vec![Runner { id: 1 }, Runner { id: 2 }]);
    }

    #[test]
    fn metric_sample_uses_camel_case() {
        let json = serde_json::to_string(&vec![MetricSample::desired_runners(3)]).unwrap();
        assert_eq!(json, r#"[{"metricName":"desired_runners","metricValue":3}]"#);
    }
}
