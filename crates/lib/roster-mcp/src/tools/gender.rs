use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{RosterMcp, helpers};

/// Parameters for filtering members by gender.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GenderParams {
    /// Gender to filter by (e.g. 'Male', 'Female', 'Non-binary').
    pub gender: String,
}

#[tool_router(router = tool_router_gender, vis = "pub")]
impl RosterMcp {
    #[tool(description = "Filter members by gender (case-insensitive exact match).")]
    async fn get_members_by_gender(
        &self,
        Parameters(params): Parameters<GenderParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let directory = self.directory();
        let report =
            helpers::run_blocking(move || directory.by_gender(&params.gender).to_string())
                .await?;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Count and share of members per gender, largest group first.")]
    async fn get_gender_statistics(&self) -> Result<CallToolResult, ErrorData> {
        let directory = self.directory();
        let report =
            helpers::run_blocking(move || directory.gender_statistics().to_string()).await?;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}
