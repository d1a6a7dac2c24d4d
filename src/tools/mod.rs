pub mod details;
pub mod mcp_router;
pub mod registry;
pub mod search;

use std::sync::Arc;

use crate::clients::sncf::SncfClient;
use crate::core::tool::Tool;
use registry::ToolRegistry;

/// Both SNCF tools over one shared client.
pub fn build_registry(client: SncfClient) -> ToolRegistry {
    ToolRegistry::with_tools([
        Arc::new(search::SearchTrainTool::new(client.clone())) as Arc<dyn Tool>,
        Arc::new(details::TrainDetailsTool::new(client)) as Arc<dyn Tool>,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_both_tools_in_stable_order() {
        let reg = build_registry(SncfClient::with_base("http://localhost:0", "key"));
        let names: Vec<&str> = reg.list().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["sncf_search_train", "sncf_train_details"]);
    }
}
