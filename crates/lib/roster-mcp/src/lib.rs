//! MCP server implementation for member-roster.
//!
//! This crate wires the member directory into rmcp tool handlers and exposes
//! the MCP-facing API surface for listing, searching, and summarizing members.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use roster_core::MemberDirectory;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

pub use tools::context::HelpCommands;
pub use tools::gender::GenderParams;
pub use tools::members::{GetMemberByIdParams, ListMembersParams, SearchMembersParams};

const SERVER_INSTRUCTIONS: &str = r"member-roster provides MCP tools for querying a CSV file of members.

The file is re-read on every call, so answers always reflect its current contents.
If the file is missing or unreadable, tools answer with an empty result instead of failing.

Tools:
- `list_members` pages through members in file order (`limit` defaults to 10, `offset` to 0).
- `search_members` matches a query against first name, last name, and email, ignoring case.
- `get_member_by_id` returns one member by the exact text of its `id` column.
- `get_member_count` returns the number of members.
- `get_members_by_gender` filters members by gender, ignoring case.
- `get_gender_statistics` returns the count and share of every gender value.

Search and gender results list at most 20 members and summarize the rest.
Use `help` for a command overview. `health` returns `ok`.";

/// MCP server wrapper around a member directory and its tool routers.
#[derive(Clone)]
pub struct RosterMcp {
    tool_router: ToolRouter<Self>,
    directory: Arc<MemberDirectory>,
}

impl RosterMcp {
    /// Creates a new server using a directory by value.
    #[must_use]
    pub fn new(directory: MemberDirectory) -> Self {
        Self::with_directory(Arc::new(directory))
    }

    /// Creates a new server using a shared directory handle.
    #[must_use]
    pub fn with_directory(directory: Arc<MemberDirectory>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_members()
            + Self::tool_router_gender()
            + Self::tool_router_context();
        Self {
            tool_router,
            directory,
        }
    }

    pub(crate) fn directory(&self) -> Arc<MemberDirectory> {
        Arc::clone(&self.directory)
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl RosterMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for RosterMcp {
    fn get_info(&self) -> ServerInfo {
        let instructions = format!(
            "{SERVER_INSTRUCTIONS}\n\nMember file: {}",
            self.directory.path().display()
        );
        ServerInfo {
            instructions: Some(instructions),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_name_the_member_file() {
        let server = RosterMcp::new(MemberDirectory::new("club/members.csv"));
        let info = server.get_info();

        let instructions = info.instructions.expect("instructions are set");
        assert!(instructions.starts_with("member-roster provides MCP tools"));
        assert!(instructions.ends_with("Member file: club/members.csv"));
    }
}
