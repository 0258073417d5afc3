//! Shared stub client and fixtures for tool tests.
//!
//! The stub implements `HarvestApi` against canned in-memory data and keeps
//! atomic call counters so tests can assert that validation short-circuits
//! before any remote lookup happens.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent};

use crate::harvest::client::HarvestApi;
use crate::harvest::error::HarvestResult;
use crate::harvest::models::{
    Client, ClientFilter, Company, Project, ProjectFilter, Task, TaskAssignment, TimeEntry,
    TimeEntryFilter, TimeEntryPayload, User, UserAssignment,
};

#[derive(Default)]
pub(crate) struct CallCounters {
    pub get_project: AtomicUsize,
    pub get_task: AtomicUsize,
    pub get_user: AtomicUsize,
    pub create_time_entry: AtomicUsize,
    pub total: AtomicUsize,
}

#[derive(Default)]
pub(crate) struct StubHarvest {
    pub company: Option<Company>,
    pub clients: Vec<Client>,
    pub client_by_id: Option<Client>,
    pub projects: Vec<Project>,
    pub project_by_id: Option<Project>,
    pub users: Vec<User>,
    pub user_by_id: Option<User>,
    pub task_by_id: Option<Task>,
    pub user_assignments: Vec<UserAssignment>,
    pub task_assignments: Vec<TaskAssignment>,
    pub time_entries: Vec<TimeEntry>,
    pub time_entry_by_id: Option<TimeEntry>,
    pub created_entry: Option<TimeEntry>,
    pub calls: CallCounters,
    pub last_client_filter: Mutex<Option<ClientFilter>>,
    pub last_project_filter: Mutex<Option<ProjectFilter>>,
    pub last_time_entry_filter: Mutex<Option<TimeEntryFilter>>,
    pub last_payload: Mutex<Option<TimeEntryPayload>>,
}

#[async_trait]
impl HarvestApi for StubHarvest {
    async fn get_company(&self) -> HarvestResult<Company> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        Ok(self.company.clone().unwrap_or_default())
    }

    async fn search_clients(&self, filter: &ClientFilter) -> HarvestResult<(Vec<Client>, u64)> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        *self.last_client_filter.lock().unwrap() = Some(filter.clone());
        Ok((self.clients.clone(), self.clients.len() as u64))
    }

    async fn get_client(&self, _id: u64) -> HarvestResult<Option<Client>> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        Ok(self.client_by_id.clone())
    }

    async fn search_projects(&self, filter: &ProjectFilter) -> HarvestResult<(Vec<Project>, u64)> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        *self.last_project_filter.lock().unwrap() = Some(filter.clone());
        Ok((self.projects.clone(), self.projects.len() as u64))
    }

    async fn get_project(&self, _id: u64) -> HarvestResult<Option<Project>> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        self.calls.get_project.fetch_add(1, Ordering::SeqCst);
        Ok(self.project_by_id.clone())
    }

    async fn list_users(&self) -> HarvestResult<(Vec<User>, u64)> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        Ok((self.users.clone(), self.users.len() as u64))
    }

    async fn get_user(&self, _id: u64) -> HarvestResult<Option<User>> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        self.calls.get_user.fetch_add(1, Ordering::SeqCst);
        Ok(self.user_by_id.clone())
    }

    async fn list_user_assignments(
        &self,
        _project_id: u64,
    ) -> HarvestResult<(Vec<UserAssignment>, u64)> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        Ok((
            self.user_assignments.clone(),
            self.user_assignments.len() as u64,
        ))
    }

    async fn list_task_assignments(
        &self,
        _project_id: u64,
    ) -> HarvestResult<(Vec<TaskAssignment>, u64)> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        Ok((
            self.task_assignments.clone(),
            self.task_assignments.len() as u64,
        ))
    }

    async fn search_time_entries(
        &self,
        filter: &TimeEntryFilter,
    ) -> HarvestResult<(Vec<TimeEntry>, u64)> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        *self.last_time_entry_filter.lock().unwrap() = Some(filter.clone());
        Ok((self.time_entries.clone(), self.time_entries.len() as u64))
    }

    async fn create_time_entry(
        &self,
        payload: &TimeEntryPayload,
    ) -> HarvestResult<Option<TimeEntry>> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        self.calls.create_time_entry.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = Some(payload.clone());
        Ok(self.created_entry.clone())
    }

    async fn get_time_entry(&self, _id: u64) -> HarvestResult<Option<TimeEntry>> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        Ok(self.time_entry_by_id.clone())
    }

    async fn get_task(&self, _id: u64) -> HarvestResult<Option<Task>> {
        self.calls.total.fetch_add(1, Ordering::SeqCst);
        self.calls.get_task.fetch_add(1, Ordering::SeqCst);
        Ok(self.task_by_id.clone())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub(crate) fn sample_client(id: u64, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        is_active: true,
        address: None,
        currency: Some("USD".to_string()),
    }
}

pub(crate) fn sample_project(id: u64, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        code: Some("PRJ".to_string()),
        is_active: true,
        is_billable: true,
        hourly_rate: Some(100.0),
        ..Default::default()
    }
}

pub(crate) fn sample_task(id: u64, name: &str) -> Task {
    Task {
        id,
        name: name.to_string(),
        billable_by_default: true,
        is_active: true,
        ..Default::default()
    }
}

pub(crate) fn sample_user(id: u64, first_name: &str, last_name: &str) -> User {
    User {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{}.{}@example.com", first_name, last_name).to_lowercase(),
        is_active: true,
        roles: vec!["Developer".to_string()],
        ..Default::default()
    }
}

pub(crate) fn sample_user_assignment(id: u64, user: User) -> UserAssignment {
    UserAssignment {
        id,
        is_project_manager: false,
        is_active: true,
        use_default_rates: true,
        hourly_rate: Some(100.0),
        user: Some(user),
        ..Default::default()
    }
}

pub(crate) fn sample_task_assignment(id: u64, task: Task) -> TaskAssignment {
    TaskAssignment {
        id,
        billable: true,
        is_active: true,
        hourly_rate: Some(100.0),
        task: Some(task),
        ..Default::default()
    }
}

pub(crate) fn sample_time_entry(id: u64) -> TimeEntry {
    TimeEntry {
        id,
        spent_date: "2024-01-15".to_string(),
        hours: 2.5,
        rounded_hours: 2.5,
        notes: Some("Code review".to_string()),
        billable: true,
        project: Some(sample_project(5, "Website Redesign")),
        task: Some(sample_task(3, "Development")),
        user: Some(sample_user(7, "Jane", "Doe")),
        ..Default::default()
    }
}

/// Extract the single text payload of a tool result.
pub(crate) fn result_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "expected exactly one content block");
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {other:?}"),
    }
}
