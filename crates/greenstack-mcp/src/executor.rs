use std::sync::Arc;

use greenstack_core::{RouteError, SkillContext, SkillInput, SkillOutput, SkillRegistry, routing};

use crate::message::{Envelope, MessageContent, PayloadKind};

/// Routes one message envelope to a skill and wraps the outcome into a
/// response envelope of matching content kind.
///
/// Every path returns a well-formed envelope; no fault escapes.
#[derive(Clone)]
pub struct MessageExecutor {
    registry: Arc<SkillRegistry>,
    context: Arc<SkillContext>,
}

impl MessageExecutor {
    #[must_use]
    pub fn new(registry: Arc<SkillRegistry>, context: Arc<SkillContext>) -> Self {
        Self { registry, context }
    }

    pub async fn execute_message(&self, message: Envelope) -> Envelope {
        let skill_id = message.skill_id().to_owned();
        tracing::info!(
            id = %message.id,
            kind = %message.content.kind,
            skill_id,
            "handling message"
        );

        match &message.content.kind {
            PayloadKind::Text => {
                let text = message.content.content.as_str().unwrap_or_default();
                match self.route_text(&skill_id, text).await {
                    Ok(output) => {
                        Envelope::success(MessageContent::text(output.into_text()), &skill_id)
                    }
                    Err(e) => {
                        tracing::error!(skill_id, "message failed: {e}");
                        Envelope::error_text(&e.to_string())
                    }
                }
            }
            PayloadKind::Json => {
                match self.route_structured(&skill_id, &message.content.content).await {
                    Ok(output) => {
                        Envelope::success(MessageContent::json(output.into_value()), &skill_id)
                    }
                    Err(e @ RouteError::UnknownSkill(_)) => {
                        tracing::error!(skill_id, "message failed: {e}");
                        Envelope::error_json(&e.to_string())
                    }
                    // Faults fall back to the text error shape, mirroring the
                    // top-level catch: no structured schema is assumed for them.
                    Err(e) => {
                        tracing::error!(skill_id, "message failed: {e}");
                        Envelope::error_text(&e.to_string())
                    }
                }
            }
            PayloadKind::Other(kind) => {
                let e = RouteError::UnsupportedKind(kind.clone());
                tracing::error!(skill_id, "message failed: {e}");
                Envelope::error_text(&e.to_string())
            }
        }
    }

    /// Text payload: text-capable skills get the raw text; structured-only
    /// skills get the text parsed as JSON, or fail without being invoked.
    async fn route_text(&self, skill_id: &str, text: &str) -> Result<SkillOutput, RouteError> {
        let entry = routing::resolve(&self.registry, skill_id)?;

        let input = if entry.descriptor.expects_structured_input {
            let value: serde_json::Value =
                serde_json::from_str(text).map_err(|_| RouteError::MalformedPayload)?;
            entry.projection.apply(&value)
        } else {
            SkillInput::Text(text.to_owned())
        };

        routing::invoke(entry, Arc::clone(&self.context), input).await
    }

    /// Structured payload: the registry entry's projection narrows it to
    /// whatever the skill expects.
    async fn route_structured(
        &self,
        skill_id: &str,
        payload: &serde_json::Value,
    ) -> Result<SkillOutput, RouteError> {
        let entry = routing::resolve(&self.registry, skill_id)?;
        let input = entry.projection.apply(payload);
        routing::invoke(entry, Arc::clone(&self.context), input).await
    }
}
