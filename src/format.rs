//! Text formatting for tool responses.
//!
//! Pure functions turning API records into newline-delimited, bulleted
//! blocks for the calling agent. No I/O; the same input sequence always
//! yields the same string, which the golden tests rely on. Missing optional
//! fields render as the literal `N/A` rather than blank.

use std::fmt::Display;

use crate::harvest::models::{Client, Project, TaskAssignment, TimeEntry, User, UserAssignment};

const MISSING: &str = "N/A";

fn or_na<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => MISSING.to_string(),
    }
}

/// Join record blocks into one list, each prefixed with a bullet marker.
fn bullet_list(blocks: Vec<String>) -> String {
    blocks
        .into_iter()
        .map(|block| format!("- {block}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_clients_list(clients: &[Client]) -> String {
    bullet_list(
        clients
            .iter()
            .map(|client| {
                format!(
                    "**Name**: {}\n  **ID**: {}\n  **Is Active**: {}\n  **Currency**: {}",
                    client.name,
                    client.id,
                    client.is_active,
                    or_na(&client.currency),
                )
            })
            .collect(),
    )
}

pub fn format_projects_list(projects: &[Project]) -> String {
    bullet_list(
        projects
            .iter()
            .map(|project| {
                format!(
                    "**ID**: {}\n  **Name**: {}\n  **Code**: {}\n  **Is Active**: {}\n  \
                     **Is Billable**: {}\n  **Hourly Rate**: {}\n  **Client**: {}",
                    project.id,
                    project.name,
                    or_na(&project.code),
                    project.is_active,
                    project.is_billable,
                    or_na(&project.hourly_rate),
                    project
                        .client
                        .as_ref()
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| MISSING.to_string()),
                )
            })
            .collect(),
    )
}

pub fn format_users_list(users: &[User]) -> String {
    bullet_list(
        users
            .iter()
            .map(|user| {
                let roles = if user.roles.is_empty() {
                    MISSING.to_string()
                } else {
                    user.roles.join(", ")
                };
                format!(
                    "**ID**: {}\n  **Name**: {} {}\n  **Email**: {}\n  **Is Active**: {}\n  \
                     **Roles**: {}",
                    user.id, user.first_name, user.last_name, user.email, user.is_active, roles,
                )
            })
            .collect(),
    )
}

pub fn format_user_assignments_list(assignments: &[UserAssignment]) -> String {
    bullet_list(
        assignments
            .iter()
            .map(|assignment| {
                format!(
                    "**ID**: {}\n  **User**: {}\n  **Is Project Manager**: {}\n  \
                     **Is Active**: {}\n  **Hourly Rate**: {}\n  **Budget**: {}",
                    assignment.id,
                    assignment
                        .user
                        .as_ref()
                        .map(|u| format!("{} {}", u.first_name, u.last_name))
                        .unwrap_or_else(|| MISSING.to_string()),
                    assignment.is_project_manager,
                    assignment.is_active,
                    or_na(&assignment.hourly_rate),
                    or_na(&assignment.budget),
                )
            })
            .collect(),
    )
}

pub fn format_task_assignments_list(assignments: &[TaskAssignment]) -> String {
    bullet_list(
        assignments
            .iter()
            .map(|assignment| {
                format!(
                    "**ID**: {}\n  **Task**: {}\n  **Billable**: {}\n  **Is Active**: {}\n  \
                     **Hourly Rate**: {}\n  **Budget**: {}",
                    assignment.id,
                    assignment
                        .task
                        .as_ref()
                        .map(|t| t.name.clone())
                        .unwrap_or_else(|| MISSING.to_string()),
                    assignment.billable,
                    assignment.is_active,
                    or_na(&assignment.hourly_rate),
                    or_na(&assignment.budget),
                )
            })
            .collect(),
    )
}

pub fn format_time_entries_list(entries: &[TimeEntry]) -> String {
    bullet_list(
        entries
            .iter()
            .map(|entry| {
                format!(
                    "**ID**: {}\n  **Date**: {}\n  **Hours**: {}\n  **Rounded Hours**: {}\n  \
                     **Notes**: {}\n  **Project**: {}\n  **Task**: {}\n  **User**: {}\n  \
                     **Billable**: {}",
                    entry.id,
                    entry.spent_date,
                    entry.hours,
                    entry.rounded_hours,
                    or_na(&entry.notes),
                    entry
                        .project
                        .as_ref()
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| MISSING.to_string()),
                    entry
                        .task
                        .as_ref()
                        .map(|t| t.name.clone())
                        .unwrap_or_else(|| MISSING.to_string()),
                    entry
                        .user
                        .as_ref()
                        .map(|u| format!("{} {}", u.first_name, u.last_name))
                        .unwrap_or_else(|| MISSING.to_string()),
                    entry.billable,
                )
            })
            .collect(),
    )
}
