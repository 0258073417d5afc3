//! Harvest MCP server library.
//!
//! Exposes the Harvest time-tracking and invoicing REST API as a set of
//! schema-validated MCP tools. The crate is split into three layers:
//!
//! - `harvest`: typed REST client for the Harvest v2 API
//! - `format`: pure text formatters turning API records into bulleted blocks
//! - `mcp`: the MCP server and its tool handlers

pub mod format;
pub mod harvest;
pub mod mcp;
