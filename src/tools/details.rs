use async_trait::async_trait;
use serde_json::json;

use crate::clients::sncf::SncfClient;
use crate::core::error::ToolError;
use crate::core::tool::{Tool, ToolOutput, ToolSpec};

pub const NAME: &str = "sncf_train_details";
pub const DESCRIPTION: &str =
    "Donne les d\u{e9}tails d'un train SNCF \u{e0} partir de son identifiant vehicle_journey.";

/// Vehicle-journey lookup. Unlike the search tool, the provider response is
/// forwarded verbatim, no reshaping.
#[derive(Clone)]
pub struct TrainDetailsTool {
    client: SncfClient,
}

impl TrainDetailsTool {
    pub fn new(client: SncfClient) -> Self {
        Self { client }
    }
}

impl ToolSpec for TrainDetailsTool {
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
                "vehicle_journey_id": {
                    "type": "string",
                    "description": "Identifiant vehicle_journey du train (ex: vehicle_journey:SNCF:2025-05-20:88721:1187:Train)"
                }
            },
            "required": ["vehicle_journey_id"]
        })
    }
}

#[async_trait]
impl Tool for TrainDetailsTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<ToolOutput, ToolError> {
        let Some(id) = arguments
            .get("vehicle_journey_id")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
        else {
            return Err(ToolError::InvalidArguments(
                "Argument 'vehicle_journey_id' requis".into(),
            ));
        };
        let payload = self.client.vehicle_journey(id).await?;
        Ok(ToolOutput::Json(payload))
    }
}
