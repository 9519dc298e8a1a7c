#![forbid(unsafe_code)]

//! MCP message envelope, routing executor, and request handler.

pub mod executor;
pub mod handler;
pub mod message;

pub use executor::MessageExecutor;
pub use handler::McpRequestHandler;
pub use message::{Envelope, MessageContent, PayloadKind};
