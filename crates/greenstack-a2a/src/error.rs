/// Failures of the serving shell itself. Routing and skill failures never
/// surface here; they are flattened into protocol responses.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid listen address {0}: {1}")]
    Address(String, std::net::AddrParseError),

    #[error("failed to bind {0}: {1}")]
    Bind(std::net::SocketAddr, std::io::Error),

    #[error("server error: {0}")]
    Serve(std::io::Error),
}
