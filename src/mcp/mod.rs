//! Model Context Protocol (MCP) server for the Plane API
//!
//! - **operations**: the catalogue of tool names, HTTP methods and path templates
//! - **server**: [`PlaneMcpServer`], which runs one operation per tool call
//! - **tools**: parameter types and `#[tool]` methods, one file per entity
//! - **format**: how upstream JSON becomes tool text
//! - **transport**: stdio and streamable HTTP serving

pub mod format;
pub mod operations;
pub mod server;
mod service;
pub mod tools;
pub mod transport;


pub use server::PlaneMcpServer;
pub use service::create_mcp_service;
pub use transport::{ServeError, serve};
