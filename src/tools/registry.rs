use std::collections::HashMap;
use std::sync::Arc;

use crate::core::envelope::ToolResponse;
use crate::core::error::ToolError;
use crate::core::tool::{Tool, ToolOutput};

/// Tool dispatcher: validates the requested name, runs the tool, and folds
/// every outcome into the uniform envelope in exactly one place.
#[derive(Clone)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn Tool>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

impl ToolRegistry {
    pub fn with_tools(iter: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        let mut map: HashMap<&'static str, Arc<dyn Tool>> = HashMap::new();
        for t in iter.into_iter() {
            map.insert(t.name(), t);
        }
        Self { by_name: Arc::new(map) }
    }

    /// Static descriptors for every registered tool; performs no external
    /// calls and cannot fail. Sorted by name for a stable listing order.
    pub fn list(&self) -> Vec<ToolMeta> {
        let mut metas: Vec<ToolMeta> = self
            .by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    /// The single outer boundary of request handling. Never panics and never
    /// leaves a call unanswered: unknown names, validation failures and
    /// upstream faults all come back as error-tagged envelopes.
    pub async fn dispatch(&self, name: &str, arguments: &serde_json::Value) -> ToolResponse {
        let Some(tool) = self.by_name.get(name) else {
            return ToolResponse::error(format!("Unknown tool: {name}"));
        };
        match tool.call(arguments).await {
            Ok(ToolOutput::Text(text)) => ToolResponse::text(text),
            Ok(ToolOutput::Json(payload)) => match serde_json::to_string_pretty(&payload) {
                Ok(text) => ToolResponse::text(text),
                Err(e) => ToolResponse::error(format!("Erreur: {e}")),
            },
            Err(ToolError::InvalidArguments(msg)) => ToolResponse::error(msg),
            Err(ToolError::Failed(msg)) => ToolResponse::error(format!("Erreur: {msg}")),
        }
    }
}
