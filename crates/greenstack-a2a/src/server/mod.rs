mod router;

use std::net::SocketAddr;

use tokio::sync::watch;

use greenstack_mcp::McpRequestHandler;

use crate::error::ServerError;
use crate::handler::A2aRequestHandler;
use crate::types::AgentCard;
use router::AppState;

const DEFAULT_MAX_BODY_SIZE: usize = 1_048_576;

/// One skill-bearing endpoint: an agent card plus both protocol handlers
/// bound to a listener.
pub struct SkillServer {
    state: AppState,
    addr: SocketAddr,
    shutdown_rx: watch::Receiver<bool>,
    max_body_size: usize,
}

impl SkillServer {
    /// # Errors
    ///
    /// Returns [`ServerError::Address`] when `host:port` is not a valid
    /// socket address.
    pub fn new(
        card: AgentCard,
        a2a: A2aRequestHandler,
        mcp: McpRequestHandler,
        host: &str,
        port: u16,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Result<Self, ServerError> {
        let raw = format!("{host}:{port}");
        let addr: SocketAddr = raw.parse().map_err(|e| ServerError::Address(raw, e))?;

        Ok(Self {
            state: AppState { card, a2a, mcp },
            addr,
            shutdown_rx,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        })
    }

    #[must_use]
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.max_body_size = size;
        self
    }

    /// Start the HTTP server. Returns when the shutdown signal is received.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server hits a
    /// fatal I/O error.
    pub async fn serve(self) -> Result<(), ServerError> {
        let app = router::build_router(self.state, self.max_body_size);

        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| ServerError::Bind(self.addr, e))?;
        tracing::info!("skill server listening on {}", self.addr);

        let mut shutdown_rx = self.shutdown_rx;
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                while !*shutdown_rx.borrow_and_update() {
                    if shutdown_rx.changed().await.is_err() {
                        std::future::pending::<()>().await;
                    }
                }
                tracing::info!("skill server shutting down");
            })
            .await
            .map_err(ServerError::Serve)?;

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use greenstack_core::{ContentMode, SkillContext};
    use greenstack_mcp::{McpRequestHandler, MessageExecutor};
    use greenstack_skills::default_registry;

    use crate::card::AgentCardBuilder;
    use crate::executor::AgentExecutor;
    use crate::handler::A2aRequestHandler;
    use crate::types::AgentSkill;

    use super::router::AppState;

    pub fn test_state() -> AppState {
        let registry = Arc::new(default_registry());
        let context = Arc::new(SkillContext::new("test-fleet", "0.0.0"));

        let descriptor = registry.resolve("planner_agent").unwrap().descriptor.clone();
        let card = AgentCardBuilder::new(&descriptor.name, "http://localhost:9001/", "0.0.0")
            .description(&descriptor.description)
            .extended_protocol_support(true)
            .default_input_modes(vec![ContentMode::TextPlain])
            .default_output_modes(vec![ContentMode::StructuredJson])
            .skill(AgentSkill::from(&descriptor))
            .build();

        AppState {
            card,
            a2a: A2aRequestHandler::new(AgentExecutor::new(
                Arc::clone(&registry),
                Arc::clone(&context),
            )),
            mcp: McpRequestHandler::new(MessageExecutor::new(registry, context)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::watch;

    use super::testing::test_state;
    use super::*;

    #[test]
    fn invalid_host_is_an_error() {
        let state = test_state();
        let (_tx, rx) = watch::channel(false);
        let result = SkillServer::new(
            state.card,
            state.a2a,
            state.mcp,
            "not a host",
            9001,
            rx,
        );
        assert!(matches!(result, Err(ServerError::Address(_, _))));
    }

    #[tokio::test]
    async fn serve_stops_on_shutdown_signal() {
        let state = test_state();
        let (tx, rx) = watch::channel(false);
        let server =
            SkillServer::new(state.card, state.a2a, state.mcp, "127.0.0.1", 0, rx).unwrap();

        let handle = tokio::spawn(server.serve());
        tokio::task::yield_now().await;
        tx.send(true).unwrap();
        let result = handle.await.unwrap();
        assert!(result.is_ok());
    }
}
