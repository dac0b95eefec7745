use std::time::Duration;

/// Default time allowed to establish a TCP/TLS connection to the node.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for an [`HttpRpcClient`](super::HttpRpcClient).
///
/// `access_token` is kept for a future authenticated transport; the client
/// never attaches it to outgoing requests.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub debug: bool,
    pub connect_timeout: Duration,
}

impl RpcConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
            debug: false,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}
