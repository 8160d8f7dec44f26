use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::RosterMcp;

/// Payload listing the MCP commands this server offers.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands this server offers.".to_string(),
                "health - Returns 'ok'.".to_string(),
                "list_members - List members in file order (limit, offset).".to_string(),
                "search_members - Search members by first name, last name, or email."
                    .to_string(),
                "get_member_by_id - Fetch one member by id.".to_string(),
                "get_member_count - Count the members in the CSV file.".to_string(),
                "get_members_by_gender - Filter members by gender.".to_string(),
                "get_gender_statistics - Count and share of members per gender.".to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl RosterMcp {
    #[tool(description = "List the MCP commands this server offers.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
