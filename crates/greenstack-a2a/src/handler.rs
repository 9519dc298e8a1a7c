use serde::Deserialize;

use greenstack_core::ContentMode;

use crate::executor::AgentExecutor;

/// Wire shape of one synchronous execution request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    pub content: serde_json::Value,
    pub skill_id: String,
    #[serde(default = "default_content_type")]
    pub content_type: ContentMode,
}

fn default_content_type() -> ContentMode {
    ContentMode::TextPlain
}

/// Thin adapter between the transport's request object and the executor.
#[derive(Clone)]
pub struct A2aRequestHandler {
    executor: AgentExecutor,
}

impl A2aRequestHandler {
    #[must_use]
    pub fn new(executor: AgentExecutor) -> Self {
        Self { executor }
    }

    pub async fn handle(&self, request: ExecutionRequest) -> serde_json::Value {
        self.executor
            .execute(&request.content, &request.skill_id, request.content_type)
            .await
    }
}
