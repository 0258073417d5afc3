//! MCP tool implementations, one module per Harvest resource group.

mod clients;
mod company;
mod projects;
mod time_entries;
mod users;

#[cfg(test)]
pub(crate) mod test_support;

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde_json::json;

use crate::harvest::HarvestError;

/// Wrap a text payload as a successful tool result.
pub(crate) fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Transport and remote failures are not handled locally; they become
/// tool-call failures the MCP layer reports to the caller.
pub(crate) fn map_api_error(e: HarvestError) -> McpError {
    McpError::internal_error(
        "harvest_api_error",
        Some(json!({ "error": e.to_string() })),
    )
}

/// Coerce a string identifier argument to a numeric id.
pub(crate) fn parse_id(value: &str, field: &str) -> Result<u64, McpError> {
    value.trim().parse::<u64>().map_err(|_| {
        McpError::invalid_params(
            format!("{field} must be a numeric id"),
            Some(json!({ "value": value })),
        )
    })
}

/// Optional identifier arguments arrive as strings; absent or empty values
/// mean "no filter" and parse to `None`.
pub(crate) fn parse_optional_id(value: Option<&str>, field: &str) -> Result<Option<u64>, McpError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_id(raw, field).map(Some),
    }
}

/// Treat empty string arguments as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
