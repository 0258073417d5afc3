//! Model Context Protocol (MCP) server implementation.
//!
//! The server runs over the stdio transport and exposes one tool group per
//! Harvest resource: company, clients, projects, users, and time entries.
//! Semantic absence (a lookup that matches nothing, a search with zero hits)
//! is returned as an ordinary text result; tool-call errors are reserved for
//! invalid parameters and transport failures.

pub mod server;
pub mod tools;


pub use server::HarvestServer;
