use roster_core::DEFAULT_LIST_LIMIT;
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

/// Parameters for paging through members.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ListMembersParams {
    /// Maximum number of members to return (default 10).
    pub limit: Option<usize>,
    /// Number of members to skip (default 0).
    pub offset: Option<usize>,
}

/// Parameters for searching members by name or email.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchMembersParams {
    /// Text matched against first name, last name, or email.
    pub query: String,
}

/// Parameters for fetching a member by id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetMemberByIdParams {
    /// Member id, matched against the exact text of the `id` column.
    pub member_id: i64,
}

#[tool_router(router = tool_router_members, vis = "pub")]
impl RosterMcp {
    #[tool(description = "List members in file order. Supports limit (default 10) and offset (default 0).")]
    async fn list_members(
        &self,
        Parameters(params): Parameters<ListMembersParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let offset = params.offset.unwrap_or(0);
        let directory = self.directory();
        let report =
            helpers::run_blocking(move || directory.list(limit, offset).to_string()).await?;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Search members by first name, last name, or email (case-insensitive).")]
    async fn search_members(
        &self,
        Parameters(params): Parameters<SearchMembersParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let directory = self.directory();
        let report =
            helpers::run_blocking(move || directory.search(&params.query).to_string()).await?;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Fetch a member by id.")]
    async fn get_member_by_id(
        &self,
        Parameters(params): Parameters<GetMemberByIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let directory = self.directory();
        let report =
            helpers::run_blocking(move || directory.get_by_id(params.member_id).to_string())
                .await?;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Count the members in the CSV file.")]
    async fn get_member_count(&self) -> Result<CallToolResult, ErrorData> {
        let directory = self.directory();
        let report = helpers::run_blocking(move || directory.count().to_string()).await?;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use roster_core::MemberDirectory;

    use super::*;

    fn fixture_server(name: &str) -> RosterMcp {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("roster-core")
            .join("tests")
            .join("data")
            .join(name);
        RosterMcp::new(MemberDirectory::new(path))
    }

    fn text_of(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|content| content.text.clone())
            .expect("tool returns text content")
    }

    #[tokio::test]
    async fn list_members_applies_defaults() {
        let server = fixture_server("members.csv");
        let result = server
            .list_members(Parameters(ListMembersParams::default()))
            .await
            .expect("list_members succeeds");

        assert!(text_of(&result).starts_with("Showing members 1 to 5 of 5:"));
    }

    #[tokio::test]
    async fn missing_file_is_not_a_tool_error() {
        let server = fixture_server("absent.csv");
        let listed = server
            .list_members(Parameters(ListMembersParams::default()))
            .await
            .expect("soft failure");
        let counted = server.get_member_count().await.expect("soft failure");

        assert_eq!(text_of(&listed), "No members found or file not accessible.");
        assert_eq!(text_of(&counted), "Total members: 0");
    }

    #[tokio::test]
    async fn search_and_lookup_render_reports() {
        let server = fixture_server("members.csv");
        let search = server
            .search_members(Parameters(SearchMembersParams {
                query: "hopper".to_string(),
            }))
            .await
            .expect("search succeeds");
        let lookup = server
            .get_member_by_id(Parameters(GetMemberByIdParams { member_id: 42 }))
            .await
            .expect("lookup succeeds");

        assert!(text_of(&search).starts_with("Found 1 member(s) matching 'hopper':"));
        assert_eq!(text_of(&lookup), "No member found with ID 42.");
    }
}
