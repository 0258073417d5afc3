//! Harvest REST API client layer.
//!
//! - `client`: authenticated HTTP client, one method per remote operation
//! - `models`: response records, list envelopes, and request types
//! - `error`: error types shared by the layer

pub mod client;
pub mod error;
pub mod models;

#[cfg(test)]
mod models_test;

pub use client::{DEFAULT_BASE_URL, HarvestApi, HarvestClient, HarvestConfig};
pub use error::{HarvestError, HarvestResult};
pub use models::{
    Client, ClientFilter, Company, Project, ProjectFilter, Task, TaskAssignment, TimeEntry,
    TimeEntryFilter, TimeEntryPayload, User, UserAssignment,
};
