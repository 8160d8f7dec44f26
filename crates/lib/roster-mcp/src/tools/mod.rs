//! MCP tool modules.
//!
//! Tools are grouped by domain: member listing and lookup, gender filters and
//! statistics, and contextual help.

pub mod context;
pub mod gender;
pub mod members;
