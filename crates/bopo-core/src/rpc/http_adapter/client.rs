use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use tracing::debug;

use crate::error::{CoreError, RpcError};

use super::super::config::RpcConfig;
use super::super::observer::{RpcObserver, TracingObserver};
use super::super::NodeRpc;
use super::connection::parse_connection;
use super::protocol::{classify_response, JsonRpcRequest};

/// BOPO node JSON-RPC client over HTTP(S).
///
/// Each call is a single POST with no retries and no credentials attached.
/// The client holds no mutable state and can be shared across tasks.
pub struct HttpRpcClient {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
    debug: bool,
    observer: Arc<dyn RpcObserver>,
}

impl HttpRpcClient {
    /// Create a client for `config.base_url`, which must be an `http://`
    /// or `https://` URL.
    ///
    /// Debug events go to [`TracingObserver`] unless replaced with
    /// [`with_observer`](Self::with_observer).
    pub fn new(config: RpcConfig) -> Result<Self, CoreError> {
        let base_url = parse_connection(&config.base_url)?;

        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("build http client: {e}")))?;

        debug!(
            rpc.url = %base_url,
            debug = config.debug,
            has_access_token = config.access_token.is_some(),
            "rpc client configured"
        );

        Ok(Self {
            client,
            base_url,
            access_token: config.access_token,
            debug: config.debug,
            observer: Arc::new(TracingObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn RpcObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token reserved for authenticated transports; never sent today.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    fn observer(&self) -> Option<&dyn RpcObserver> {
        self.debug.then_some(self.observer.as_ref())
    }

    async fn rpc_call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let observer = self.observer();
        if let Some(observer) = observer {
            observer.request_started(method, &params);
        }

        let req = JsonRpcRequest::new(method, &params);
        let sent = self
            .client
            .post(&self.base_url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&req)
            .send()
            .await;

        if let Some(observer) = observer {
            observer.request_completed(method, sent.as_ref().ok().map(|r| r.status()));
        }

        // Non-2xx statuses still carry a JSON-RPC envelope, so the body is
        // classified regardless of status.
        let response = sent?;
        let body = response.bytes().await?;

        if let Some(observer) = observer {
            observer.response_received(method, &String::from_utf8_lossy(&body));
        }

        let decoded: Value = serde_json::from_slice(&body)?;
        classify_response(decoded)
    }
}

#[async_trait]
impl NodeRpc for HttpRpcClient {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, CoreError> {
        if method.is_empty() {
            return Err(CoreError::InvalidInput(
                "procedure name must not be empty".to_owned(),
            ));
        }
        Ok(self.rpc_call(method, params).await?)
    }
}
