//! Harvest v2 REST client.
//!
//! One method per remote operation, one HTTP call per method. Lookups that
//! match nothing normalize to `Ok(None)`; transport failures and non-success
//! statuses propagate as errors with no retry or backoff. The `HarvestApi`
//! trait is the seam the MCP tools depend on, so tests can substitute a stub.

use async_trait::async_trait;
use reqwest::{Response, StatusCode, header};
use serde::de::DeserializeOwned;
use std::env;
use tracing::debug;

use crate::harvest::error::{HarvestError, HarvestResult};
use crate::harvest::models::{
    Client, ClientFilter, ClientList, Company, Project, ProjectFilter, ProjectList, Task,
    TaskAssignment, TaskAssignmentList, TimeEntry, TimeEntryFilter, TimeEntryList,
    TimeEntryPayload, User, UserAssignment, UserAssignmentList, UserList,
};

/// Production API root; overridable for tests and proxies.
pub const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com/v2";

const ACCESS_TOKEN_VAR: &str = "HARVEST_ACCESS_TOKEN";
const ACCOUNT_ID_VAR: &str = "HARVEST_ACCOUNT_ID";
const BASE_URL_VAR: &str = "HARVEST_BASE_URL";

/// Credentials and optional base URL override for the Harvest API.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub access_token: String,
    pub account_id: String,
    pub base_url: Option<String>,
}

impl HarvestConfig {
    /// Read configuration from the process environment.
    ///
    /// A missing or empty credential is a fatal startup condition; callers
    /// are expected to exit before registering any tool.
    pub fn from_env() -> HarvestResult<Self> {
        let access_token = env::var(ACCESS_TOKEN_VAR).unwrap_or_default();
        if access_token.trim().is_empty() {
            return Err(HarvestError::MissingCredential {
                name: ACCESS_TOKEN_VAR,
            });
        }

        let account_id = env::var(ACCOUNT_ID_VAR).unwrap_or_default();
        if account_id.trim().is_empty() {
            return Err(HarvestError::MissingCredential {
                name: ACCOUNT_ID_VAR,
            });
        }

        Ok(Self {
            access_token,
            account_id,
            base_url: env::var(BASE_URL_VAR).ok().filter(|v| !v.trim().is_empty()),
        })
    }
}

/// Operations the MCP tools need from the Harvest API.
///
/// List operations return the first page plus the envelope's `total_entries`
/// count; there is no pagination traversal. Get-by-id operations return
/// `None` for a missing resource instead of an error.
#[async_trait]
pub trait HarvestApi: Send + Sync + 'static {
    async fn get_company(&self) -> HarvestResult<Company>;

    async fn search_clients(&self, filter: &ClientFilter) -> HarvestResult<(Vec<Client>, u64)>;
    async fn get_client(&self, id: u64) -> HarvestResult<Option<Client>>;

    async fn search_projects(&self, filter: &ProjectFilter) -> HarvestResult<(Vec<Project>, u64)>;
    async fn get_project(&self, id: u64) -> HarvestResult<Option<Project>>;

    async fn list_users(&self) -> HarvestResult<(Vec<User>, u64)>;
    async fn get_user(&self, id: u64) -> HarvestResult<Option<User>>;

    async fn list_user_assignments(
        &self,
        project_id: u64,
    ) -> HarvestResult<(Vec<UserAssignment>, u64)>;
    async fn list_task_assignments(
        &self,
        project_id: u64,
    ) -> HarvestResult<(Vec<TaskAssignment>, u64)>;

    async fn search_time_entries(
        &self,
        filter: &TimeEntryFilter,
    ) -> HarvestResult<(Vec<TimeEntry>, u64)>;
    async fn create_time_entry(
        &self,
        payload: &TimeEntryPayload,
    ) -> HarvestResult<Option<TimeEntry>>;
    async fn get_time_entry(&self, id: u64) -> HarvestResult<Option<TimeEntry>>;

    async fn get_task(&self, id: u64) -> HarvestResult<Option<Task>>;
}

/// Authenticated reqwest-backed implementation of [`HarvestApi`].
#[derive(Debug)]
pub struct HarvestClient {
    base_url: String,
    http: reqwest::Client,
}

impl HarvestClient {
    /// Build a client from credentials.
    ///
    /// Fails immediately when either credential is empty. Every outgoing
    /// request carries the bearer token, the account id header, and a JSON
    /// content type via reqwest default headers.
    pub fn new(config: HarvestConfig) -> HarvestResult<Self> {
        if config.access_token.trim().is_empty() {
            return Err(HarvestError::MissingCredential {
                name: ACCESS_TOKEN_VAR,
            });
        }
        if config.account_id.trim().is_empty() {
            return Err(HarvestError::MissingCredential {
                name: ACCOUNT_ID_VAR,
            });
        }

        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|e| HarvestError::Config {
                message: format!("invalid access token: {e}"),
            })?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            "Harvest-Account-Id",
            header::HeaderValue::from_str(&config.account_id).map_err(|e| {
                HarvestError::Config {
                    message: format!("invalid account id: {e}"),
                }
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| HarvestError::Config {
                message: e.to_string(),
            })?;

        Ok(Self {
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            http,
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> HarvestResult<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%path, params = query.len(), "GET");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        decode_body(request.send().await?).await
    }
}

async fn decode_body<T: DeserializeOwned>(response: Response) -> HarvestResult<Option<T>> {
    let status = response.status();
    let body = response.text().await?;
    decode_payload(status, &body)
}

/// Status and body to a typed result. 404 and an empty success body both
/// normalize to `None`; any other non-success status is an API error.
pub(crate) fn decode_payload<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> HarvestResult<Option<T>> {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(HarvestError::Api {
            status: status.as_u16(),
            message: body.to_string(),
        });
    }
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| HarvestError::InvalidResponse {
            message: e.to_string(),
        })
}

#[async_trait]
impl HarvestApi for HarvestClient {
    async fn get_company(&self) -> HarvestResult<Company> {
        self.get_json::<Company>("/company", &[])
            .await?
            .ok_or_else(|| HarvestError::InvalidResponse {
                message: "empty company response".to_string(),
            })
    }

    async fn search_clients(&self, filter: &ClientFilter) -> HarvestResult<(Vec<Client>, u64)> {
        let envelope: Option<ClientList> = self.get_json("/clients", &filter.to_query()).await?;
        Ok(match envelope {
            Some(list) => (list.clients, list.pagination.total_entries),
            None => (Vec::new(), 0),
        })
    }

    async fn get_client(&self, id: u64) -> HarvestResult<Option<Client>> {
        self.get_json(&format!("/clients/{id}"), &[]).await
    }

    async fn search_projects(&self, filter: &ProjectFilter) -> HarvestResult<(Vec<Project>, u64)> {
        let envelope: Option<ProjectList> = self.get_json("/projects", &filter.to_query()).await?;
        Ok(match envelope {
            Some(list) => (list.projects, list.pagination.total_entries),
            None => (Vec::new(), 0),
        })
    }

    async fn get_project(&self, id: u64) -> HarvestResult<Option<Project>> {
        self.get_json(&format!("/projects/{id}"), &[]).await
    }

    async fn list_users(&self) -> HarvestResult<(Vec<User>, u64)> {
        let envelope: Option<UserList> = self.get_json("/users", &[]).await?;
        Ok(match envelope {
            Some(list) => (list.users, list.pagination.total_entries),
            None => (Vec::new(), 0),
        })
    }

    async fn get_user(&self, id: u64) -> HarvestResult<Option<User>> {
        self.get_json(&format!("/users/{id}"), &[]).await
    }

    async fn list_user_assignments(
        &self,
        project_id: u64,
    ) -> HarvestResult<(Vec<UserAssignment>, u64)> {
        let envelope: Option<UserAssignmentList> = self
            .get_json(&format!("/projects/{project_id}/user_assignments"), &[])
            .await?;
        Ok(match envelope {
            Some(list) => (list.user_assignments, list.pagination.total_entries),
            None => (Vec::new(), 0),
        })
    }

    async fn list_task_assignments(
        &self,
        project_id: u64,
    ) -> HarvestResult<(Vec<TaskAssignment>, u64)> {
        let envelope: Option<TaskAssignmentList> = self
            .get_json(&format!("/projects/{project_id}/task_assignments"), &[])
            .await?;
        Ok(match envelope {
            Some(list) => (list.task_assignments, list.pagination.total_entries),
            None => (Vec::new(), 0),
        })
    }

    async fn search_time_entries(
        &self,
        filter: &TimeEntryFilter,
    ) -> HarvestResult<(Vec<TimeEntry>, u64)> {
        let envelope: Option<TimeEntryList> =
            self.get_json("/time_entries", &filter.to_query()).await?;
        Ok(match envelope {
            Some(list) => (list.time_entries, list.pagination.total_entries),
            None => (Vec::new(), 0),
        })
    }

    async fn create_time_entry(
        &self,
        payload: &TimeEntryPayload,
    ) -> HarvestResult<Option<TimeEntry>> {
        let url = format!("{}/time_entries", self.base_url);
        debug!(path = "/time_entries", "POST");
        decode_body(self.http.post(&url).json(payload).send().await?).await
    }

    async fn get_time_entry(&self, id: u64) -> HarvestResult<Option<TimeEntry>> {
        self.get_json(&format!("/time_entries/{id}"), &[]).await
    }

    async fn get_task(&self, id: u64) -> HarvestResult<Option<Task>> {
        self.get_json(&format!("/tasks/{id}"), &[]).await
    }
}
