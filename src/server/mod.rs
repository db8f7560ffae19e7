//! MCP server implementation for the agenda.
//!
//! This module exposes the contact book's user triggers as MCP tools over
//! stdio, so any MCP client can drive it.

pub mod handlers;

pub use handlers::AgendaMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the agenda MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns when the
/// client disconnects.
pub async fn run_server(server: AgendaMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
