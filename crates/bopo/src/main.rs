mod cli;

use clap::Parser;
use eyre::WrapErr;

use bopo_core::{HttpRpcClient, NodeRpc, RpcConfig};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    let default_filter = if args.debug {
        "info,bopo_core=trace"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let mut config = RpcConfig::new(&args.rpc_url).with_debug(args.debug);
    if let Some(token) = &args.access_token {
        config = config.with_access_token(token);
    }
    let rpc = HttpRpcClient::new(config).wrap_err("invalid RPC configuration")?;

    let params: Vec<serde_json::Value> = args.params.iter().map(|p| cli::parse_param(p)).collect();
    tracing::info!(method = %args.method, params = params.len(), url = %args.rpc_url, "calling node");

    let result = rpc
        .call(&args.method, params)
        .await
        .wrap_err_with(|| format!("`{}` failed against `{}`", args.method, args.rpc_url))?;

    println!(
        "{}",
        serde_json::to_string_pretty(&result).wrap_err("render result")?
    );
    Ok(())
}
