//! MCP tool for company information.

use rmcp::{ErrorData as McpError, model::CallToolResult, tool, tool_router};

use crate::harvest::HarvestApi;
use crate::mcp::server::HarvestServer;
use crate::mcp::tools::{map_api_error, text_result};

#[tool_router(router = company_router, vis = "pub(crate)")]
impl<H: HarvestApi> HarvestServer<H> {
    /// The company is a singleton on the authenticated account, so this tool
    /// has no not-found case.
    #[tool(name = "get-company", description = "Get company information")]
    pub async fn get_company(&self) -> Result<CallToolResult, McpError> {
        let company = self.client().get_company().await.map_err(map_api_error)?;

        Ok(text_result(format!(
            "Company Name: {}\nCompany URL: {}\nCompany Domain: {}\nCompany Currency: {}",
            company.name, company.base_uri, company.full_domain, company.currency,
        )))
    }
}
