//! BOPO node RPC layer.
//!
//! Defines the [`NodeRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod config;
mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod observer;

pub use config::RpcConfig;
pub use http_adapter::{
    basic_auth, classify_response, ErrorField, HttpRpcClient, ResponseEnvelope,
};
pub use observer::{RpcObserver, TracingObserver};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CoreError;

/// A remote procedure endpoint speaking JSON-RPC 2.0.
///
/// Implementations send one request per call and hand back the untyped
/// `result` value, or the classified failure.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Call `method` with positional `params` and return its `result`.
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, CoreError>;

    /// Call `method` and deserialize its `result` into `T`.
    async fn call_typed<T>(&self, method: &str, params: Vec<Value>) -> Result<T, CoreError>
    where
        Self: Sized,
        T: DeserializeOwned + Send,
    {
        let raw = self.call(method, params).await?;
        decode_result(method, raw)
    }
}

fn decode_result<T: DeserializeOwned>(method: &str, raw: Value) -> Result<T, CoreError> {
    serde_json::from_value(raw).map_err(|e| CoreError::InvalidResult {
        method: method.to_owned(),
        message: e.to_string(),
    })
}
