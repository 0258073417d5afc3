//! MCP tools for Harvest projects and their assignments.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::format::{
    format_projects_list, format_task_assignments_list, format_user_assignments_list,
};
use crate::harvest::{HarvestApi, ProjectFilter};
use crate::mcp::server::HarvestServer;
use crate::mcp::tools::{map_api_error, non_empty, parse_id, text_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchProjectsParams {
    #[schemars(description = "ID of the client to filter projects by")]
    pub client_id: Option<String>,
    #[schemars(description = "Search for projects by name")]
    pub name: Option<String>,
    #[schemars(description = "Search for active projects")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectParams {
    #[schemars(description = "ID of the project to get")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectUsersParams {
    #[schemars(description = "ID of the project to list user assignments for")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectTasksParams {
    #[schemars(description = "ID of the project to list task assignments for")]
    pub project_id: String,
}

#[tool_router(router = projects_router, vis = "pub(crate)")]
impl<H: HarvestApi> HarvestServer<H> {
    #[tool(
        name = "search-projects",
        description = "Search for projects in the Harvest account"
    )]
    pub async fn search_projects(
        &self,
        params: Parameters<SearchProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        let filter = ProjectFilter {
            client_id: super::parse_optional_id(params.0.client_id.as_deref(), "clientId")?,
            name: non_empty(params.0.name),
            is_active: params.0.is_active,
        };

        let (projects, total) = self
            .client()
            .search_projects(&filter)
            .await
            .map_err(map_api_error)?;

        if projects.is_empty() {
            return Ok(text_result("Result: No projects found"));
        }

        Ok(text_result(format!(
            "Result: {total} projects found:\n{}",
            format_projects_list(&projects)
        )))
    }

    #[tool(name = "get-project", description = "Get a project by ID")]
    pub async fn get_project(
        &self,
        params: Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_id(&params.0.project_id, "projectId")?;

        let Some(project) = self.client().get_project(id).await.map_err(map_api_error)? else {
            return Ok(text_result(format!(
                "Result: Project not found with this ID {id}"
            )));
        };

        Ok(text_result(format!(
            "Result: Project found:\n**ID**: {}\n**Name**: {}\n**Is Active**: {}\n\
             **Is Billable**: {}\n**Hourly Rate**: {}",
            project.id,
            project.name,
            project.is_active,
            project.is_billable,
            project
                .hourly_rate
                .map(|rate| rate.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        )))
    }

    #[tool(
        name = "list-project-users",
        description = "List the user assignments of a project"
    )]
    pub async fn list_project_users(
        &self,
        params: Parameters<ListProjectUsersParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_id(&params.0.project_id, "projectId")?;

        let (assignments, total) = self
            .client()
            .list_user_assignments(id)
            .await
            .map_err(map_api_error)?;

        if assignments.is_empty() {
            return Ok(text_result("Result: No user assignments found"));
        }

        Ok(text_result(format!(
            "Result: {total} user assignments found:\n{}",
            format_user_assignments_list(&assignments)
        )))
    }

    #[tool(
        name = "list-project-tasks",
        description = "List the task assignments of a project"
    )]
    pub async fn list_project_tasks(
        &self,
        params: Parameters<ListProjectTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = parse_id(&params.0.project_id, "projectId")?;

        let (assignments, total) = self
            .client()
            .list_task_assignments(id)
            .await
            .map_err(map_api_error)?;

        if assignments.is_empty() {
            return Ok(text_result("Result: No task assignments found"));
        }

        Ok(text_result(format!(
            "Result: {total} task assignments found:\n{}",
            format_task_assignments_list(&assignments)
        )))
    }
}
