#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid result for `{method}`: {message}")]
    InvalidResult { method: String, message: String },
}

/// Failures of a single JSON-RPC round trip.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("decode JSON-RPC response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The node answered with a structured `error` object.
    #[error("[{code}]{message}")]
    Server { code: i64, message: String },

    #[error("Response is empty! ")]
    EmptyResponse,
}

impl RpcError {
    /// True when the failure happened before a JSON envelope could be read.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}
