use std::net::SocketAddr;

use sncf_mcp_gateway::clients::sncf::SncfClient;
use sncf_mcp_gateway::infra::config::Config;
use sncf_mcp_gateway::infra::runtime::mcp_transport;
use sncf_mcp_gateway::infra::{http_app, logging};
use sncf_mcp_gateway::tools::build_registry;
use sncf_mcp_gateway::tools::mcp_router::SncfSvc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    // Fatal before any request handling: the SNCF API key is mandatory.
    let cfg = Config::from_env()?;
    tracing::info!(mode = %cfg.mode, port = cfg.port, "BOOT sncf-mcp-gateway");

    let client = SncfClient::new(cfg.api_key.clone());
    let registry = build_registry(client);

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == "stdio" {
        let factory = {
            let registry = registry.clone();
            move || (SncfSvc::new(registry.clone()), SncfSvc::router())
        };
        mcp_transport::serve_stdio(factory)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    // HTTP server: /healthz + streamable MCP at /mcp + JSON-RPC shim at /rpc.
    let app = http_app::build_app(registry);
    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
