use std::sync::Arc;

use crate::content::{SkillInput, SkillOutput};
use crate::registry::{RegisteredSkill, SkillRegistry};
use crate::skill::SkillContext;

/// Everything that can go wrong between receiving a routed payload and
/// producing a skill result. All variants are recoverable; the protocol
/// executors flatten them into their wire error convention.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown skill ID: {0}")]
    UnknownSkill(String),

    #[error("Skill {0} requires JSON input")]
    RequiresStructured(String),

    #[error("Invalid JSON input")]
    MalformedPayload,

    #[error("Unsupported content type: {0}")]
    UnsupportedKind(String),

    #[error("{0}")]
    Skill(String),
}

impl RouteError {
    /// The wire-level error map both protocols embed in their responses.
    #[must_use]
    pub fn to_wire(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}

/// Look up a skill or fail with the unknown-id error.
///
/// # Errors
///
/// Returns [`RouteError::UnknownSkill`] when the id has no registry entry.
pub fn resolve<'a>(
    registry: &'a SkillRegistry,
    skill_id: &str,
) -> Result<&'a RegisteredSkill, RouteError> {
    registry
        .resolve(skill_id)
        .ok_or_else(|| RouteError::UnknownSkill(skill_id.to_owned()))
}

/// Invoke a resolved skill, converting any fault into a routed error.
///
/// This is the hard fault boundary: nothing above it observes a raw skill
/// failure.
///
/// # Errors
///
/// Returns [`RouteError::Skill`] carrying the fault's message.
pub async fn invoke(
    entry: &RegisteredSkill,
    ctx: Arc<SkillContext>,
    input: SkillInput,
) -> Result<SkillOutput, RouteError> {
    entry
        .skill
        .invoke(ctx, input)
        .await
        .map_err(|e| RouteError::Skill(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::registry::{Projection, SkillDescriptor};
    use crate::skill::{Skill, SkillError, SkillFuture};

    struct CountingSkill {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl Skill for CountingSkill {
        fn invoke(&self, _ctx: Arc<SkillContext>, _input: SkillInput) -> SkillFuture {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    Err(SkillError::Invalid("synthetic failure".into()))
                } else {
                    Ok(SkillOutput::Text("ok".into()))
                }
            })
        }
    }

    fn registry_with(calls: Arc<AtomicUsize>, fail: bool) -> SkillRegistry {
        SkillRegistry::builder()
            .register(
                SkillDescriptor {
                    id: "counter".into(),
                    name: "Counter".into(),
                    description: "counts calls".into(),
                    tags: vec![],
                    expects_structured_input: false,
                },
                Projection::Whole,
                Arc::new(CountingSkill { calls, fail }),
            )
            .build()
    }

    #[test]
    fn error_messages_are_contractual() {
        assert_eq!(
            RouteError::UnknownSkill("ghost_agent".into()).to_string(),
            "Unknown skill ID: ghost_agent"
        );
        assert_eq!(
            RouteError::RequiresStructured("executor_agent".into()).to_string(),
            "Skill executor_agent requires JSON input"
        );
        assert_eq!(RouteError::MalformedPayload.to_string(), "Invalid JSON input");
        assert_eq!(
            RouteError::UnsupportedKind("binary".into()).to_string(),
            "Unsupported content type: binary"
        );
    }

    #[test]
    fn to_wire_embeds_message() {
        let wire = RouteError::UnknownSkill("ghost_agent".into()).to_wire();
        assert_eq!(wire["error"], "Unknown skill ID: ghost_agent");
    }

    #[test]
    fn resolve_unknown_reports_literal_id() {
        let registry = registry_with(Arc::new(AtomicUsize::new(0)), false);
        let err = resolve(&registry, "ghost_agent").unwrap_err();
        assert!(matches!(err, RouteError::UnknownSkill(ref id) if id == "ghost_agent"));
    }

    #[tokio::test]
    async fn invoke_converts_fault_to_message() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = registry_with(Arc::clone(&calls), true);
        let entry = registry.resolve("counter").unwrap();
        let ctx = Arc::new(SkillContext::new("t", "0"));

        let err = invoke(entry, ctx, SkillInput::Text("x".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, RouteError::Skill(ref m) if m == "synthetic failure"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invoke_success_passes_output() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = registry_with(Arc::clone(&calls), false);
        let entry = registry.resolve("counter").unwrap();
        let ctx = Arc::new(SkillContext::new("t", "0"));

        let out = invoke(entry, ctx, SkillInput::Text("x".into()))
            .await
            .unwrap();
        assert_eq!(out, SkillOutput::Text("ok".into()));
    }
}
