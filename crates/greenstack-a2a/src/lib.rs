#![forbid(unsafe_code)]

//! A2A protocol surface: agent card, executor, request handler, and the
//! serving shell that binds one skill endpoint to a listener.

pub mod card;
pub mod error;
pub mod executor;
pub mod handler;
pub mod server;
pub mod types;

pub use card::AgentCardBuilder;
pub use error::ServerError;
pub use executor::AgentExecutor;
pub use handler::{A2aRequestHandler, ExecutionRequest};
pub use server::SkillServer;
pub use types::{AgentCapabilities, AgentCard, AgentSkill};
