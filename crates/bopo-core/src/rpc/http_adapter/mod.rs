//! Native JSON-RPC client for BOPO node endpoints.
//!
//! Implements [`NodeRpc`](super::NodeRpc) over HTTP POST using `reqwest`:
//! one request per call, a fixed envelope id, and response classification
//! into result, server error, or empty response.

mod client;
mod connection;
mod protocol;

pub use client::HttpRpcClient;
pub use connection::basic_auth;
pub use protocol::{classify_response, ErrorField, ResponseEnvelope};
