use clap::Parser;

/// bopo — call a JSON-RPC procedure on a BOPO node and print the result.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Node JSON-RPC URL.
    #[arg(long, default_value = "http://127.0.0.1:8332", env = "BOPO_RPC_URL")]
    pub rpc_url: String,

    /// Access token (stored for future authenticated transports; not sent).
    #[arg(long, env = "BOPO_ACCESS_TOKEN")]
    pub access_token: Option<String>,

    /// Log the request lifecycle and raw response.
    #[arg(long, env = "BOPO_DEBUG")]
    pub debug: bool,

    /// Remote procedure name, e.g. `getblockcount`.
    pub method: String,

    /// Positional parameters. Each is parsed as JSON, falling back to a
    /// plain JSON string when it does not parse.
    pub params: Vec<String>,
}

pub fn parse_param(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()))
}
