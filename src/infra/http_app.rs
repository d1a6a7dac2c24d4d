use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::infra::runtime::mcp_transport;
use crate::tools::mcp_router::SncfSvc;
use crate::tools::registry::ToolRegistry;

/// HTTP app: `/healthz`, streamable MCP at `/mcp`, and the legacy JSON-RPC
/// shim at `/rpc`. All tool traffic funnels into the same registry.
pub fn build_app(registry: ToolRegistry) -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let factory = {
        let registry = registry.clone();
        move || (SncfSvc::new(registry.clone()), SncfSvc::router())
    };
    let mcp_service = mcp_transport::make_streamable_http_service(factory, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
        .route("/rpc", post(crate::api::mcp::http))
        .with_state(registry)
}
