use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::content::{SkillInput, SkillOutput};

/// Read-only context forwarded to every skill invocation.
///
/// Constructed once at process start; the router never mutates it.
#[derive(Debug, Clone)]
pub struct SkillContext {
    pub agent_name: String,
    pub agent_version: String,
    pub baseline: MeasurementBaseline,
}

impl SkillContext {
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            agent_name: name.into(),
            agent_version: version.into(),
            baseline: MeasurementBaseline::default(),
        }
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: MeasurementBaseline) -> Self {
        self.baseline = baseline;
        self
    }
}

/// Measured page baseline the auditor scores against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementBaseline {
    pub page_weight_kb: f64,
    pub lcp_seconds: f64,
    pub inp_millis: f64,
}

impl Default for MeasurementBaseline {
    fn default() -> Self {
        Self {
            page_weight_kb: 750.0,
            lcp_seconds: 2.8,
            inp_millis: 150.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("{0}")]
    Invalid(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SkillFuture = Pin<Box<dyn Future<Output = Result<SkillOutput, SkillError>> + Send>>;

/// An independently invocable unit of agent logic.
///
/// Implementations receive input matching their declared content mode and
/// should not fail in normal operation; the executors tolerate it if they do.
pub trait Skill: Send + Sync {
    fn invoke(&self, ctx: Arc<SkillContext>, input: SkillInput) -> SkillFuture;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_builder() {
        let ctx = SkillContext::new("greenstack", "0.3.1");
        assert_eq!(ctx.agent_name, "greenstack");
        assert_eq!(ctx.agent_version, "0.3.1");
        assert!((ctx.baseline.page_weight_kb - 750.0).abs() < f64::EPSILON);
    }

    #[test]
    fn context_with_baseline() {
        let baseline = MeasurementBaseline {
            page_weight_kb: 300.0,
            lcp_seconds: 1.2,
            inp_millis: 80.0,
        };
        let ctx = SkillContext::new("a", "b").with_baseline(baseline);
        assert_eq!(ctx.baseline, baseline);
    }

    #[test]
    fn skill_error_display_passes_message_through() {
        let err = SkillError::Invalid("planner_agent expects plain text".into());
        assert_eq!(err.to_string(), "planner_agent expects plain text");
    }
}
