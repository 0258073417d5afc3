//! MCP server coordinator.
//!
//! `HarvestServer` owns the shared API client and the combined tool router.
//! Tool implementations live in `tools`, one module per Harvest resource
//! group; each contributes its own router and the constructor merges them.
//! Generic over `H: HarvestApi` so tests can substitute a stub client.

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::harvest::HarvestApi;

pub struct HarvestServer<H: HarvestApi> {
    client: Arc<H>,
    tool_router: ToolRouter<Self>,
}

impl<H: HarvestApi> HarvestServer<H> {
    /// Create a server with all tool groups registered.
    pub fn new(client: impl Into<Arc<H>>) -> Self {
        Self {
            client: client.into(),
            tool_router: Self::company_router()
                + Self::clients_router()
                + Self::projects_router()
                + Self::users_router()
                + Self::time_entries_router(),
        }
    }

    pub(crate) fn client(&self) -> &H {
        &self.client
    }

    /// Combined router, mainly useful for asserting the registered surface.
    pub fn tools(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }
}

impl<H: HarvestApi> Clone for HarvestServer<H> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            tool_router: self.tool_router.clone(),
        }
    }
}

#[tool_handler]
impl<H: HarvestApi> ServerHandler for HarvestServer<H> {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "Harvest MCP Server - query company information, clients, projects, users \
             and time entries in a Harvest account, and create new time entries"
                .to_string(),
        );
        info
    }
}
