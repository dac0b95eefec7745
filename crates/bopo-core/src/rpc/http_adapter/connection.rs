use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Url;

use crate::error::CoreError;

pub(super) fn parse_connection(connection: &str) -> Result<String, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "invalid base url `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(connection.to_owned()),
        other => Err(CoreError::InvalidConfig(format!(
            "unsupported base url scheme `{other}`; expected http or https"
        ))),
    }
}

/// Encode `username:password` as RFC 2617 basic credentials.
///
/// The result is the bare base64 token, without the `Basic ` prefix and
/// without URL encoding. Not attached to requests by [`HttpRpcClient`](super::HttpRpcClient).
pub fn basic_auth(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{username}:{password}"))
}
