//! Data shapes for the Harvest v2 API.
//!
//! Response models are immutable value records decoded verbatim from Harvest
//! JSON and discarded after the enclosing tool call. Identifiers are always
//! assigned by Harvest; this crate never generates one. Embedded sub-entities
//! (a time entry's project, an assignment's user) are snapshots at fetch
//! time, not live references.
//!
//! All containers are `#[serde(default)]` because Harvest embeds truncated
//! copies of related resources in list responses; absent display fields are
//! substituted at the formatting boundary, never here.

use serde::{Deserialize, Serialize};

// =============================================================================
// Response Models
// =============================================================================

/// The company attached to the authenticated account. Singleton; read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub base_uri: String,
    pub full_domain: String,
    pub name: String,
    pub is_active: bool,
    pub week_start_day: String,
    pub time_format: String,
    pub date_format: String,
    pub plan_type: String,
    pub weekly_capacity: u64,
    pub clock: String,
    pub currency: String,
    pub currency_code_display: String,
    pub currency_symbol_display: String,
    pub decimal_symbol: String,
    pub thousands_separator: String,
    pub color_scheme: String,
}

/// A Harvest client (customer). Referenced by projects and time entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub is_active: bool,
    pub address: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub code: Option<String>,
    pub is_active: bool,
    pub is_billable: bool,
    pub is_fixed_fee: bool,
    pub bill_by: String,
    pub budget: Option<f64>,
    pub budget_by: Option<String>,
    pub budget_is_monthly: bool,
    pub cost_budget: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub fee: Option<f64>,
    pub notes: Option<String>,
    pub starts_on: Option<String>,
    pub ends_on: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub client: Option<Client>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub billable_by_default: bool,
    pub is_default: bool,
    pub is_active: bool,
    pub default_hourly_rate: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Join entity between a project and a task, with assignment-specific
/// rate and budget overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskAssignment {
    pub id: u64,
    pub billable: bool,
    pub is_active: bool,
    pub hourly_rate: Option<f64>,
    pub budget: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
    pub project: Option<Project>,
    pub task: Option<Task>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: Option<String>,
    pub timezone: Option<String>,
    pub weekly_capacity: u64,
    pub has_access_to_all_future_projects: bool,
    pub is_contractor: bool,
    pub is_active: bool,
    pub default_hourly_rate: Option<f64>,
    pub cost_rate: Option<f64>,
    pub roles: Vec<String>,
    pub access_roles: Vec<String>,
    pub avatar_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Join entity between a project and a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAssignment {
    pub id: u64,
    pub is_project_manager: bool,
    pub is_active: bool,
    pub use_default_rates: bool,
    pub hourly_rate: Option<f64>,
    pub budget: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
    pub project: Option<Project>,
    pub user: Option<User>,
}

/// The richest entity: created via `create_time_entry`, otherwise read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeEntry {
    pub id: u64,
    pub spent_date: String,
    pub hours: f64,
    pub hours_without_timer: Option<f64>,
    pub rounded_hours: f64,
    pub notes: Option<String>,
    pub is_locked: bool,
    pub locked_reason: Option<String>,
    pub is_closed: bool,
    pub is_billed: bool,
    pub timer_started_at: Option<String>,
    pub started_time: Option<String>,
    pub ended_time: Option<String>,
    pub is_running: bool,
    pub billable: bool,
    pub budgeted: bool,
    pub billable_rate: Option<f64>,
    pub cost_rate: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
    pub user: Option<User>,
    pub client: Option<Client>,
    pub project: Option<Project>,
    pub task: Option<Task>,
    pub user_assignment: Option<UserAssignment>,
    pub task_assignment: Option<TaskAssignment>,
}

// =============================================================================
// List Envelopes
// =============================================================================

/// Pagination metadata wrapping every list response. Only `total_entries`
/// and the resource array are consumed; there is no page traversal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub per_page: u64,
    pub total_pages: u64,
    pub total_entries: u64,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
    pub page: u64,
    pub links: Option<PageLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLinks {
    pub first: Option<String>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientList {
    pub clients: Vec<Client>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectList {
    pub projects: Vec<Project>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserList {
    pub users: Vec<User>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserAssignmentList {
    pub user_assignments: Vec<UserAssignment>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskAssignmentList {
    pub task_assignments: Vec<TaskAssignment>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TimeEntryList {
    pub time_entries: Vec<TimeEntry>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

// =============================================================================
// Request Types
// =============================================================================

/// Filters for `GET /clients`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientFilter {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

/// Filters for `GET /projects`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub client_id: Option<u64>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

/// Filters for `GET /time_entries`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeEntryFilter {
    pub user_id: Option<u64>,
    pub client_id: Option<u64>,
    pub project_id: Option<u64>,
    pub task_id: Option<u64>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Request body for `POST /time_entries`. The only mutating call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntryPayload {
    pub project_id: u64,
    pub task_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub spent_date: String,
    pub hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// Harvest treats an absent query parameter as "no filter", while an explicit
// empty or zero value could be read as a filter value. Absent, empty, false
// and zero inputs are therefore omitted from the query string entirely.

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(v) = value {
        if !v.trim().is_empty() {
            pairs.push((key, v.to_string()));
        }
    }
}

fn push_flag(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<bool>) {
    if value == Some(true) {
        pairs.push((key, "true".to_string()));
    }
}

fn push_id(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<u64>) {
    if let Some(v) = value {
        if v != 0 {
            pairs.push((key, v.to_string()));
        }
    }
}

impl ClientFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "name", self.name.as_deref());
        push_flag(&mut pairs, "is_active", self.is_active);
        pairs
    }
}

impl ProjectFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_id(&mut pairs, "client_id", self.client_id);
        push_text(&mut pairs, "name", self.name.as_deref());
        push_flag(&mut pairs, "is_active", self.is_active);
        pairs
    }
}

impl TimeEntryFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_id(&mut pairs, "user_id", self.user_id);
        push_id(&mut pairs, "client_id", self.client_id);
        push_id(&mut pairs, "project_id", self.project_id);
        push_id(&mut pairs, "task_id", self.task_id);
        push_text(&mut pairs, "from", self.from.as_deref());
        push_text(&mut pairs, "to", self.to.as_deref());
        pairs
    }
}
