//! MCP server for Angi home services.
//!
//! Exposes `search_professionals`, `get_home_advice`, and `request_quote`
//! tools over JSON-RPC 2.0 stdio transport, compatible with any MCP-aware
//! AI agent. All tool data comes from an immutable in-process dataset;
//! the core performs no I/O beyond the transport itself.

pub mod config;
pub mod dataset;
pub mod handlers;
pub mod lead;
pub mod protocol;
pub mod server;
pub mod state;

pub mod schema;
