use async_trait::async_trait;
use serde_json::json;

use crate::clients::sncf::SncfClient;
use crate::core::error::ToolError;
use crate::core::tool::{Tool, ToolOutput, ToolSpec};

pub const NAME: &str = "sncf_search_train";
pub const DESCRIPTION: &str =
    "Recherche les trains entre deux villes via l'API SNCF. Fournit les horaires, dur\u{e9}es et correspondances.";

/// Journey search: resolve both endpoints to stop areas, then query the
/// journeys endpoint and reshape the result list.
#[derive(Clone)]
pub struct SearchTrainTool {
    client: SncfClient,
}

impl SearchTrainTool {
    pub fn new(client: SncfClient) -> Self {
        Self { client }
    }
}

fn arg_str<'a>(arguments: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    // Empty strings count as absent, mirroring the truthiness check of the
    // original adapter (an empty datetime bypasses the filter).
    arguments
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
}

impl ToolSpec for SearchTrainTool {
    fn name(&self) -> &'static str {
        NAME
    }
    fn description(&self) -> &'static str {
        DESCRIPTION
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "from": { "type": "string", "description": "Ville ou gare de d\u{e9}part" },
                "to": { "type": "string", "description": "Ville ou gare d'arriv\u{e9}e" },
                "datetime": {
                    "type": "string",
                    "description": "Date et heure de d\u{e9}part au format YYYYMMDDTHHmmss (optionnel)"
                }
            },
            "required": ["from", "to"]
        })
    }
}

#[async_trait]
impl Tool for SearchTrainTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<ToolOutput, ToolError> {
        let (Some(from), Some(to)) = (arg_str(arguments, "from"), arg_str(arguments, "to")) else {
            return Err(ToolError::InvalidArguments(
                "Arguments 'from' et 'to' requis".into(),
            ));
        };
        let datetime = arg_str(arguments, "datetime");

        // Two sequential resolutions; a miss on either endpoint fails the
        // whole search, no partial results.
        let from_id = self
            .client
            .resolve_stop_area(from)
            .await?
            .ok_or_else(|| ToolError::Failed(format!("no stop area found for {from}")))?;
        let to_id = self
            .client
            .resolve_stop_area(to)
            .await?
            .ok_or_else(|| ToolError::Failed(format!("no stop area found for {to}")))?;

        let journeys = self.client.journeys(&from_id, &to_id, datetime).await?;
        if journeys.is_empty() {
            return Ok(ToolOutput::Text("no journey found".into()));
        }
        let payload = serde_json::to_value(journeys).map_err(|e| ToolError::Failed(e.to_string()))?;
        Ok(ToolOutput::Json(payload))
    }
}
