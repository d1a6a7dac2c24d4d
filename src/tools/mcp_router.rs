use std::future::Future;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::{CallToolResult, Content, JsonObject};

use crate::core::envelope::{ContentItem, ToolResponse};
use crate::infra::runtime::mcp_transport::ServerHandler;
use crate::tools::registry::ToolRegistry;
use crate::tools::{details, search};

/// The MCP server handler; both tool methods route through the shared
/// dispatcher so the envelope semantics match the other surfaces.
#[derive(Clone)]
pub struct SncfSvc {
    registry: ToolRegistry,
}

impl SncfSvc {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }
}

impl ServerHandler for SncfSvc {}

impl From<ToolResponse> for CallToolResult {
    fn from(resp: ToolResponse) -> Self {
        let content = resp
            .content
            .into_iter()
            .map(|ContentItem::Text { text }| Content::text(text))
            .collect();
        if resp.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

#[rmcp::tool_router]
impl SncfSvc {
    #[rmcp::tool(
        name = "sncf_search_train",
        description = "Recherche les trains entre deux villes via l'API SNCF. Fournit les horaires, durées et correspondances."
    )]
    async fn search_train(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        tracing::debug!(params = ?params.0, "sncf_search_train invoked");
        let args = serde_json::Value::Object(params.0);
        Ok(self.registry.dispatch(search::NAME, &args).await.into())
    }

    #[rmcp::tool(
        name = "sncf_train_details",
        description = "Donne les détails d'un train SNCF à partir de son identifiant vehicle_journey."
    )]
    async fn train_details(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        tracing::debug!(params = ?params.0, "sncf_train_details invoked");
        let args = serde_json::Value::Object(params.0);
        Ok(self.registry.dispatch(details::NAME, &args).await.into())
    }
}

pub type SncfRouter = ToolRouter<SncfSvc>;

impl SncfSvc {
    pub fn router() -> SncfRouter {
        // Wrapper to expose the macro-generated private tool_router
        Self::tool_router()
    }
}
