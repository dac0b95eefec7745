use serde_json::{Map, Value};

use crate::error::RpcError;

pub(super) const JSONRPC_VERSION: &str = "2.0";

/// Every request carries the same id; responses are never correlated.
pub(super) const REQUEST_ID: &str = "1";

#[derive(Debug, serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: &'static str,
    pub(super) method: &'a str,
    pub(super) params: &'a [Value],
}

impl<'a> JsonRpcRequest<'a> {
    pub(super) fn new(method: &'a str, params: &'a [Value]) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        }
    }
}

/// The `error` member of a response envelope.
///
/// Only the object form is meaningful to the classifier; anything else is
/// kept verbatim and otherwise ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorField {
    Absent,
    Object { code: i64, message: String },
    Other(Value),
}

impl ErrorField {
    fn from_value(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Object(obj)) => Self::Object {
                code: obj.get("code").map_or(0, loose_i64),
                message: obj.get("message").map_or_else(String::new, loose_string),
            },
            Some(other) => Self::Other(other),
        }
    }
}

/// A decoded response envelope: `{code, message, error, result, id}`.
///
/// `result` distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(Value::Null)`).
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub error: ErrorField,
    pub result: Option<Value>,
    pub id: Option<Value>,
}

impl ResponseEnvelope {
    /// Read the envelope fields out of any JSON value. A non-object value
    /// yields an envelope with every field absent.
    pub fn from_value(value: Value) -> Self {
        let mut obj = match value {
            Value::Object(obj) => obj,
            _ => Map::new(),
        };
        Self {
            code: obj.get("code").and_then(Value::as_i64),
            message: obj
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned),
            error: ErrorField::from_value(obj.remove("error")),
            result: obj.remove("result"),
            id: obj.remove("id"),
        }
    }

    /// Resolve the envelope to its result or its classified error.
    pub fn into_result(self) -> Result<Value, RpcError> {
        match self.error {
            ErrorField::Object { code, message } => Err(RpcError::Server { code, message }),
            ErrorField::Absent | ErrorField::Other(_) => self.result.ok_or(RpcError::EmptyResponse),
        }
    }
}

/// Classify a parsed JSON-RPC response.
///
/// An `error` object wins over any `result`; otherwise a present `result`
/// (including `null`) is returned, and a missing one is an empty response.
pub fn classify_response(response: Value) -> Result<Value, RpcError> {
    ResponseEnvelope::from_value(response).into_result()
}

fn loose_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn loose_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
