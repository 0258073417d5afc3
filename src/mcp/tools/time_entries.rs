//! MCP tools for Harvest time entries.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::format::format_time_entries_list;
use crate::harvest::{HarvestApi, TimeEntryFilter, TimeEntryPayload};
use crate::mcp::server::HarvestServer;
use crate::mcp::tools::{map_api_error, non_empty, parse_id, parse_optional_id, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchTimeEntriesParams {
    #[schemars(description = "ID of the project to search for")]
    pub project_id: Option<String>,
    #[schemars(description = "ID of the task to search for")]
    pub task_id: Option<String>,
    #[schemars(description = "ID of the user to search for")]
    pub user_id: Option<String>,
    #[schemars(description = "ID of the client to search for")]
    pub client_id: Option<String>,
    #[schemars(description = "Start date to search from (YYYY-MM-DD)")]
    pub from: Option<String>,
    #[schemars(description = "End date to search to (YYYY-MM-DD)")]
    pub to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeEntryParams {
    #[schemars(description = "ID of the project to create the time entry for")]
    pub project_id: String,
    #[schemars(description = "ID of the task to create the time entry for")]
    pub task_id: String,
    #[schemars(description = "ID of the user to create the time entry for")]
    pub user_id: String,
    #[schemars(description = "Date of the time entry (YYYY-MM-DD)")]
    pub date: String,
    #[schemars(description = "Number of hours worked")]
    pub hours: f64,
    #[schemars(description = "Notes for the time entry")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTimeEntryParams {
    #[schemars(description = "ID of the time entry to get")]
    pub time_entry_id: String,
}

/// Presence check distinct from a not-found result: a missing argument is a
/// tool-call failure raised before any network call.
fn require_present(value: &str, label: &str) -> Result<(), McpError> {
    if value.trim().is_empty() {
        return Err(McpError::invalid_params(
            format!("Please provide a {label}"),
            Some(json!({ "missing": label })),
        ));
    }
    Ok(())
}

#[tool_router(router = time_entries_router, vis = "pub(crate)")]
impl<H: HarvestApi> HarvestServer<H> {
    #[tool(
        name = "search-time-entries",
        description = "Search for time entries in the Harvest account"
    )]
    pub async fn search_time_entries(
        &self,
        params: Parameters<SearchTimeEntriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let filter = TimeEntryFilter {
            user_id: parse_optional_id(p.user_id.as_deref(), "userId")?,
            client_id: parse_optional_id(p.client_id.as_deref(), "clientId")?,
            project_id: parse_optional_id(p.project_id.as_deref(), "projectId")?,
            task_id: parse_optional_id(p.task_id.as_deref(), "taskId")?,
            from: non_empty(p.from),
            to: non_empty(p.to),
        };

        let (entries, total) = self
            .client()
            .search_time_entries(&filter)
            .await
            .map_err(map_api_error)?;

        if entries.is_empty() {
            return Ok(text_result("Result: No time entries found"));
        }

        Ok(text_result(format!(
            "Result: {total} time entries found:\n{}",
            format_time_entries_list(&entries)
        )))
    }

    /// Validation order is significant: presence checks for the project,
    /// task, and user ids come before any network call, then the three
    /// resources are resolved in that order with the first absent one
    /// short-circuiting, and only then is the entry created.
    #[tool(
        name = "create-time-entry",
        description = "Create a time entry in the Harvest account"
    )]
    pub async fn create_time_entry(
        &self,
        params: Parameters<CreateTimeEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;

        require_present(&p.project_id, "project ID")?;
        require_present(&p.task_id, "task ID")?;
        require_present(&p.user_id, "user ID")?;

        let project_id = parse_id(&p.project_id, "projectId")?;
        let task_id = parse_id(&p.task_id, "taskId")?;
        let user_id = parse_id(&p.user_id, "userId")?;

        let Some(project) = self
            .client()
            .get_project(project_id)
            .await
            .map_err(map_api_error)?
        else {
            return Ok(text_result(format!(
                "Result: Project with ID {project_id} not found"
            )));
        };

        let Some(task) = self.client().get_task(task_id).await.map_err(map_api_error)? else {
            return Ok(text_result(format!(
                "Result: Task with ID {task_id} not found"
            )));
        };

        let Some(user) = self.client().get_user(user_id).await.map_err(map_api_error)? else {
            return Ok(text_result(format!(
                "Result: User with ID {user_id} not found"
            )));
        };

        let payload = TimeEntryPayload {
            project_id: project.id,
            task_id: task.id,
            user_id: Some(user.id),
            spent_date: p.date,
            hours: p.hours,
            notes: p.notes,
        };

        match self
            .client()
            .create_time_entry(&payload)
            .await
            .map_err(map_api_error)?
        {
            Some(entry) => Ok(text_result(format!(
                "Result: Time entry created successfully: ID: {}",
                entry.id
            ))),
            None => Ok(text_result("Result: Failed to create time entry")),
        }
    }

    #[tool(
        name = "get-time-entry",
        description = "Get a time entry in the Harvest account"
    )]
    pub async fn get_time_entry(
        &self,
        params: Parameters<GetTimeEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_id(&params.0.time_entry_id, "timeEntryId")?;

        let Some(entry) = self
            .client()
            .get_time_entry(id)
            .await
            .map_err(map_api_error)?
        else {
            return Ok(text_result(format!(
                "Result: Time entry with ID {id} not found"
            )));
        };

        Ok(text_result(format!(
            "Result: Time entry found:\n{}",
            format_time_entries_list(std::slice::from_ref(&entry))
        )))
    }
}
