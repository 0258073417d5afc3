//! MCP tools for Harvest clients (customers).

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::format::format_clients_list;
use crate::harvest::{ClientFilter, HarvestApi};
use crate::mcp::server::HarvestServer;
use crate::mcp::tools::{map_api_error, non_empty, parse_id, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchClientsParams {
    #[schemars(description = "Search for clients by name")]
    pub name: Option<String>,
    #[schemars(description = "Search for active clients")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetClientParams {
    #[schemars(description = "ID of the client to get")]
    pub client_id: String,
}

#[tool_router(router = clients_router, vis = "pub(crate)")]
impl<H: HarvestApi> HarvestServer<H> {
    #[tool(
        name = "search-clients",
        description = "Search for clients in the Harvest account"
    )]
    pub async fn search_clients(
        &self,
        params: Parameters<SearchClientsParams>,
    ) -> Result<CallToolResult, McpError> {
        let filter = ClientFilter {
            name: non_empty(params.0.name),
            is_active: params.0.is_active,
        };

        let (clients, total) = self
            .client()
            .search_clients(&filter)
            .await
            .map_err(map_api_error)?;

        if clients.is_empty() {
            return Ok(text_result("Result: No clients found"));
        }

        Ok(text_result(format!(
            "Result: {total} clients found:\n{}",
            format_clients_list(&clients)
        )))
    }

    #[tool(name = "get-client", description = "Get a client by ID")]
    pub async fn get_client(
        &self,
        params: Parameters<GetClientParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_id(&params.0.client_id, "clientId")?;

        let Some(client) = self.client().get_client(id).await.map_err(map_api_error)? else {
            return Ok(text_result(format!(
                "Result: No client found with this ID {id}"
            )));
        };

        Ok(text_result(format!(
            "ID: {}\n**Name**: {}\n**Is Active**: {}\n**Currency**: {}",
            client.id,
            client.name,
            client.is_active,
            client.currency.as_deref().unwrap_or("N/A"),
        )))
    }
}
