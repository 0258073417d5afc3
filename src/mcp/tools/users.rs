//! MCP tools for Harvest users.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::format::format_users_list;
use crate::harvest::HarvestApi;
use crate::mcp::server::HarvestServer;
use crate::mcp::tools::{map_api_error, parse_id, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetUserParams {
    #[schemars(description = "ID of the user to get")]
    pub user_id: String,
}

#[tool_router(router = users_router, vis = "pub(crate)")]
impl<H: HarvestApi> HarvestServer<H> {
    #[tool(name = "list-users", description = "List all users in the Harvest account")]
    pub async fn list_users(&self) -> Result<CallToolResult, McpError> {
        let (users, total) = self.client().list_users().await.map_err(map_api_error)?;

        if users.is_empty() {
            return Ok(text_result("Result: No users found"));
        }

        Ok(text_result(format!(
            "Result: {total} users found\n\n{}",
            format_users_list(&users)
        )))
    }

    #[tool(name = "get-user", description = "Get a user by ID")]
    pub async fn get_user(
        &self,
        params: Parameters<GetUserParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_id(&params.0.user_id, "userId")?;

        let Some(user) = self.client().get_user(id).await.map_err(map_api_error)? else {
            return Ok(text_result("Result: User not found"));
        };

        Ok(text_result(format!(
            "Result: User found\n\n{}",
            format_users_list(std::slice::from_ref(&user))
        )))
    }
}
