//! Request lifecycle hooks used when a client runs in debug mode.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, trace};

/// Receives lifecycle events for each RPC call made by a debug-enabled
/// client. Non-debug clients never invoke their observer.
pub trait RpcObserver: Send + Sync {
    fn request_started(&self, method: &str, params: &[Value]);

    /// `status` is `None` when the request failed before a response arrived.
    fn request_completed(&self, method: &str, status: Option<StatusCode>);

    fn response_received(&self, method: &str, body: &str);
}

/// Default observer: forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RpcObserver for TracingObserver {
    fn request_started(&self, method: &str, params: &[Value]) {
        debug!(rpc.method = method, rpc.params = params.len(), "rpc call");
    }

    fn request_completed(&self, method: &str, status: Option<StatusCode>) {
        match status {
            Some(status) => debug!(rpc.method = method, %status, "rpc request completed"),
            None => debug!(rpc.method = method, "rpc request failed before response"),
        }
    }

    fn response_received(&self, method: &str, body: &str) {
        debug!(rpc.method = method, body_len = body.len(), "rpc response");
        trace!(rpc.method = method, body = %body, "rpc response body");
    }
}
