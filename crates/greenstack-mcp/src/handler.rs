use crate::executor::MessageExecutor;
use crate::message::Envelope;

/// Thin adapter between the transport's message object and the executor.
#[derive(Clone)]
pub struct McpRequestHandler {
    executor: MessageExecutor,
}

impl McpRequestHandler {
    #[must_use]
    pub fn new(executor: MessageExecutor) -> Self {
        Self { executor }
    }

    pub async fn handle_message(&self, message: Envelope) -> Envelope {
        self.executor.execute_message(message).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use greenstack_core::SkillContext;
    use greenstack_skills::default_registry;

    use crate::message::{MessageContent, PayloadKind};

    use super::*;

    #[tokio::test]
    async fn handler_delegates_to_executor() {
        let executor = MessageExecutor::new(
            Arc::new(default_registry()),
            Arc::new(SkillContext::new("test", "0.0.0")),
        );
        let handler = McpRequestHandler::new(executor);

        let message = Envelope::new(
            MessageContent::text("a landing page"),
            HashMap::from([("skill_id".to_owned(), "planner_agent".to_owned())]),
        );
        let response = handler.handle_message(message).await;
        assert_eq!(response.content.kind, PayloadKind::Text);
        assert_eq!(
            response.metadata.get("skill_id").map(String::as_str),
            Some("planner_agent")
        );
    }
}
