use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{CoreError, RpcError};

use super::NodeRpc;

/// A mock node for testing. Returns canned results or server errors per
/// method, populated via the builder pattern, and records every call.
pub struct MockRpc {
    replies: HashMap<String, Result<Value, (i64, String)>>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            replies: HashMap::new(),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

pub struct MockRpcBuilder {
    replies: HashMap<String, Result<Value, (i64, String)>>,
}

impl MockRpcBuilder {
    pub fn with_result(mut self, method: &str, result: Value) -> Self {
        self.replies.insert(method.to_owned(), Ok(result));
        self
    }

    pub fn with_error(mut self, method: &str, code: i64, message: &str) -> Self {
        self.replies
            .insert(method.to_owned(), Err((code, message.to_owned())));
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            replies: self.replies,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl NodeRpc for MockRpc {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, CoreError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push((method.to_owned(), params));

        match self.replies.get(method) {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err((code, message))) => Err(RpcError::Server {
                code: *code,
                message: message.clone(),
            }
            .into()),
            None => Err(RpcError::Server {
                code: -32601,
                message: "Method not found".to_owned(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct BlockHeader {
        height: u64,
        hash: String,
    }

    #[tokio::test]
    async fn call_typed_decodes_canned_result() {
        let rpc = MockRpc::builder()
            .with_result("getblockheader", json!({"height": 12, "hash": "00ab"}))
            .build();

        let header: BlockHeader = rpc
            .call_typed("getblockheader", vec![json!("00ab")])
            .await
            .expect("canned header must decode");
        assert_eq!(header.height, 12);
        assert_eq!(header.hash, "00ab");
        assert_eq!(
            rpc.calls(),
            vec![("getblockheader".to_owned(), vec![json!("00ab")])]
        );
    }

    #[tokio::test]
    async fn call_typed_propagates_server_error_unchanged() {
        let rpc = MockRpc::builder()
            .with_error("getblockhash", -8, "Block height out of range")
            .build();

        let hash: Result<String, CoreError> =
            rpc.call_typed("getblockhash", vec![json!(999_999)]).await;
        let err = hash.expect_err("server error must surface");
        assert_eq!(err.to_string(), "[-8]Block height out of range");
    }

    #[tokio::test]
    async fn unknown_method_is_method_not_found() {
        let rpc = MockRpc::builder().build();
        let err = rpc
            .call("nosuchmethod", Vec::new())
            .await
            .expect_err("unknown method");
        assert!(matches!(
            err,
            CoreError::Rpc(RpcError::Server { code: -32601, .. })
        ));
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let rpc: Box<dyn NodeRpc> = Box::new(
            MockRpc::builder()
                .with_result("getblockcount", json!(7))
                .build(),
        );
        let count = rpc
            .call("getblockcount", Vec::new())
            .await
            .expect("canned count");
        assert_eq!(count, json!(7));
    }
}
