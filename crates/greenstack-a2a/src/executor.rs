use std::sync::Arc;

use greenstack_core::{
    ContentMode, RouteError, SkillContext, SkillInput, SkillOutput, SkillRegistry, routing,
};

/// Routes one synchronous execution request to a skill and flattens the
/// outcome into the wire value: the result verbatim, or `{"error": …}`.
///
/// This is a hard fault boundary; callers never observe a raw skill failure.
#[derive(Clone)]
pub struct AgentExecutor {
    registry: Arc<SkillRegistry>,
    context: Arc<SkillContext>,
}

impl AgentExecutor {
    #[must_use]
    pub fn new(registry: Arc<SkillRegistry>, context: Arc<SkillContext>) -> Self {
        Self { registry, context }
    }

    pub async fn execute(
        &self,
        content: &serde_json::Value,
        skill_id: &str,
        content_type: ContentMode,
    ) -> serde_json::Value {
        tracing::info!(skill_id, content_type = %content_type, "executing skill");

        match self.route(content, skill_id, content_type).await {
            Ok(output) => output.into_value(),
            Err(e) => {
                tracing::error!(skill_id, "execution failed: {e}");
                e.to_wire()
            }
        }
    }

    async fn route(
        &self,
        content: &serde_json::Value,
        skill_id: &str,
        content_type: ContentMode,
    ) -> Result<SkillOutput, RouteError> {
        let entry = routing::resolve(&self.registry, skill_id)?;

        let input = match content_type {
            ContentMode::StructuredJson => entry.projection.apply(content),
            ContentMode::TextPlain => {
                if entry.descriptor.expects_structured_input {
                    return Err(RouteError::RequiresStructured(skill_id.to_owned()));
                }
                let text = content
                    .as_str()
                    .map_or_else(|| content.to_string(), ToOwned::to_owned);
                SkillInput::Text(text)
            }
        };

        routing::invoke(entry, Arc::clone(&self.context), input).await
    }
}
