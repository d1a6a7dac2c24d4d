use axum::extract::State;
use axum::Json;
use serde_json::{json, Value as J};

use crate::core::mcp::{err as rpc_err, ok as rpc_ok, RpcErr, RpcReq, RpcResp};
use crate::tools::registry::ToolRegistry;

fn tools_list(reg: &ToolRegistry) -> J {
    let tools: Vec<J> = reg
        .list()
        .into_iter()
        .map(|t| {
            json!({ "name": t.name, "description": t.description, "inputSchema": t.input_schema })
        })
        .collect();
    json!({ "tools": tools })
}

/// `tools.call` result: the uniform envelope, error-tagged or not. Protocol
/// errors are reserved for malformed requests, not tool failures.
async fn call_tool(reg: &ToolRegistry, params: &J) -> Result<J, String> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or("missing tool name")?;
    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| J::Object(Default::default()));
    let resp = reg.dispatch(name, &args).await;
    serde_json::to_value(resp).map_err(|e| e.to_string())
}

/// Unparseable body: the request id is unknowable, so it is null.
fn parse_error(message: impl Into<String>) -> RpcResp {
    RpcResp {
        jsonrpc: "2.0",
        id: J::Null,
        result: None,
        error: Some(RpcErr {
            code: -32700,
            message: message.into(),
            data: None,
        }),
    }
}

// HTTP handler. The body is parsed by hand so malformed JSON still gets a
// JSON-RPC -32700 response instead of a bare rejection.
pub async fn http(State(reg): State<ToolRegistry>, body: String) -> Json<RpcResp> {
    let req: RpcReq = match serde_json::from_str(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable rpc body");
            return Json(parse_error(format!("parse error: {e}")));
        }
    };
    tracing::debug!(method = %req.method, id = ?req.id, "rpc handler invoked");
    let id = req.id.clone();
    let resp = match req.method.as_str() {
        "initialize" => rpc_ok(
            id,
            json!({ "serverInfo": { "name": "sncf-mcp-gateway", "version": env!("CARGO_PKG_VERSION") }, "capabilities": { "tools": {} } }),
        ),
        "shutdown" => rpc_ok(id, J::Null),
        "tools.list" | "tools/list" => rpc_ok(id, tools_list(&reg)),
        "tools.call" | "tools/call" => match call_tool(&reg, &req.params).await {
            Ok(out) => rpc_ok(id, out),
            Err(e) => {
                tracing::warn!(error = %e, "malformed tools.call");
                rpc_err(id, -32602, e, None)
            }
        },
        _ => rpc_err(id, -32601, format!("unknown method: {}", req.method), None),
    };
    Json(resp)
}
