use async_trait::async_trait;

use crate::core::error::ToolError;

/// Minimal metadata every tool must expose.
pub trait ToolSpec {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> serde_json::Value;
}

/// What a tool hands back to the dispatcher before enveloping.
///
/// `Json` payloads are serialized as pretty-printed text at the envelope
/// boundary; `Text` is emitted verbatim (e.g. the "no journey found" literal).
#[derive(Debug, Clone)]
pub enum ToolOutput {
    Text(String),
    Json(serde_json::Value),
}

/// Tool = Spec + async execution against an argument map.
#[async_trait]
pub trait Tool: ToolSpec + Send + Sync {
    async fn call(&self, arguments: &serde_json::Value) -> Result<ToolOutput, ToolError>;
}
