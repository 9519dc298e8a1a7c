use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use greenstack_mcp::{Envelope, McpRequestHandler};

use crate::handler::{A2aRequestHandler, ExecutionRequest};
use crate::types::AgentCard;

#[derive(Clone)]
pub(crate) struct AppState {
    pub card: AgentCard,
    pub a2a: A2aRequestHandler,
    pub mcp: McpRequestHandler,
}

pub(super) fn build_router(state: AppState, max_body_size: usize) -> Router {
    let protocol = Router::new()
        .route("/execute", post(execute_handler))
        .route("/mcp", post(message_handler))
        .layer(RequestBodyLimitLayer::new(max_body_size));

    Router::new()
        .route("/.well-known/agent-card.json", get(agent_card_handler))
        .merge(protocol)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn agent_card_handler(State(state): State<AppState>) -> Json<AgentCard> {
    Json(state.card.clone())
}

async fn execute_handler(
    State(state): State<AppState>,
    Json(request): Json<ExecutionRequest>,
) -> Json<serde_json::Value> {
    Json(state.a2a.handle(request).await)
}

async fn message_handler(
    State(state): State<AppState>,
    Json(message): Json<Envelope>,
) -> Json<Envelope> {
    Json(state.mcp.handle_message(message).await)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::server::testing::test_state;

    use super::*;

    const MAX_BODY: usize = 1024 * 1024;

    fn post_json(uri: &str, body: &serde_json::Value) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn agent_card_endpoint() {
        let app = build_router(test_state(), MAX_BODY);

        let req = axum::http::Request::builder()
            .uri("/.well-known/agent-card.json")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 200);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let card: AgentCard = serde_json::from_slice(&body).unwrap();
        assert_eq!(card.name, "Sustainable Planning Agent");
        assert!(card.capabilities.extended_protocol_support);
    }

    #[tokio::test]
    async fn execute_endpoint_success() {
        let app = build_router(test_state(), MAX_BODY);

        let body = serde_json::json!({
            "content": "a photo gallery",
            "skillId": "planner_agent",
            "contentType": "text/plain"
        });
        let resp = app.oneshot(post_json("/execute", &body)).await.unwrap();
        assert_eq!(resp.status(), 200);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let result: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(result["components"].is_array());
    }

    #[tokio::test]
    async fn execute_endpoint_unknown_skill_is_http_200_with_error_body() {
        let app = build_router(test_state(), MAX_BODY);

        let body = serde_json::json!({
            "content": "x",
            "skillId": "ghost_agent"
        });
        let resp = app.oneshot(post_json("/execute", &body)).await.unwrap();
        assert_eq!(resp.status(), 200);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let result: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result["error"], "Unknown skill ID: ghost_agent");
    }

    #[tokio::test]
    async fn mcp_endpoint_round_trips_envelopes() {
        let app = build_router(test_state(), MAX_BODY);

        let body = serde_json::json!({
            "id": "m-1",
            "content": {"type": "text", "content": "hello"},
            "metadata": {"skill_id": "ghost_agent"}
        });
        let resp = app.oneshot(post_json("/mcp", &body)).await.unwrap();
        assert_eq!(resp.status(), 200);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let envelope: Envelope = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            envelope.metadata.get("error").map(String::as_str),
            Some("Unknown skill ID: ghost_agent")
        );
    }

    #[tokio::test]
    async fn body_size_limit() {
        let app = build_router(test_state(), 256);

        let oversized = vec![b'a'; 512];
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/execute")
            .header("content-type", "application/json")
            .body(Body::from(oversized))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 413);
    }

    #[tokio::test]
    async fn card_endpoint_skips_body_limit() {
        let app = build_router(test_state(), 1);

        let req = axum::http::Request::builder()
            .uri("/.well-known/agent-card.json")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), 200);
    }
}
