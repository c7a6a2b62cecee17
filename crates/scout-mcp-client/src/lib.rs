// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! `scout-mcp-client` — MCP (Model Context Protocol) client for scout.
//!
//! Launches the external Reddit tool server as a child process, performs the
//! MCP initialize handshake over its stdio pipes, enumerates the tools it
//! exposes, and wraps each one as a scout [`Tool`] the agent can call.
//!
//! # Architecture
//!
//! ```text
//! scout agent
//!       │  Arc<dyn Tool>
//!       ▼
//! McpTool (scout_tools::Tool adapter)
//!       │  tools/call
//!       ▼
//! Peer<RoleClient>  ──► child process (uvx … mcp-reddit), stdio JSON-RPC
//! ```
//!
//! # Failure policy
//!
//! Discovery never brings the process down.  [`connect`] reports two failure
//! kinds — the launcher binary missing from PATH, and everything else — and
//! [`connect_or_degrade`] converts both into the degraded result: an empty
//! tool list plus a no-op [`ServerConnection`].  Callers treat the degraded
//! handle exactly like a live one; `close()` is a no-op on it.
//!
//! The handshake carries no timeout.  An unresponsive server blocks the
//! caller until the child process exits or closes its pipes.

pub mod bridge;
mod connection;
mod error;

pub use bridge::McpTool;
pub use connection::ServerConnection;
pub use error::DiscoveryError;

use std::sync::Arc;

use rmcp::{
    service::{RoleClient, RunningService},
    transport::TokioChildProcess,
    ServiceExt,
};
use scout_config::ToolServerConfig;
use scout_tools::Tool;
use tokio::process::Command;
use tracing::{debug, error, info};

/// Launch the tool server described by `server` and enumerate its tools.
///
/// On success returns the discovered tools — provider order preserved,
/// duplicate names kept — and the live [`ServerConnection`] owning the child
/// process.  The caller must `close()` the connection when the agent's
/// lifetime ends.
///
/// # Errors
///
/// [`DiscoveryError::LauncherMissing`] when the launcher binary is not on
/// PATH; [`DiscoveryError::Connection`] for every other spawn or handshake
/// failure.
pub async fn connect(
    server: &ToolServerConfig,
) -> Result<(Vec<Arc<dyn Tool>>, ServerConnection), DiscoveryError> {
    debug!(command = %server.command, args = ?server.args, "launching tool server");

    let mut cmd = Command::new(&server.command);
    cmd.args(&server.args);
    for (key, value) in &server.env {
        cmd.env(key, value);
    }

    let transport = TokioChildProcess::new(cmd).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DiscoveryError::LauncherMissing(server.command.clone())
        } else {
            DiscoveryError::Connection(format!("spawning {}: {e}", server.command))
        }
    })?;

    let service = ().serve(transport).await.map_err(|e| {
        DiscoveryError::Connection(format!("MCP initialize handshake failed: {e}"))
    })?;

    enumerate(service).await
}

/// Enumerate tools on an already-initialized MCP client service.
///
/// Split out of [`connect`] so callers (and tests) can hand in a service
/// connected over any transport — in-memory pipes included — and still get
/// the same tool wrapping and connection handling.
pub async fn enumerate(
    service: RunningService<RoleClient, ()>,
) -> Result<(Vec<Arc<dyn Tool>>, ServerConnection), DiscoveryError> {
    let listed = service
        .peer()
        .list_tools(None)
        .await
        .map_err(|e| DiscoveryError::Connection(format!("tools/list request failed: {e}")))?;

    let peer = service.peer().clone();
    let tools: Vec<Arc<dyn Tool>> = listed
        .tools
        .into_iter()
        .map(|info| Arc::new(McpTool::new(&info, peer.clone())) as Arc<dyn Tool>)
        .collect();

    Ok((tools, ServerConnection::live(service)))
}

/// Discovery with the degraded-mode fallback applied.
///
/// Never fails: any [`DiscoveryError`] is logged and converted into an empty
/// tool list paired with the shared no-op handle.  This is the sole
/// failure-recovery policy — discovery failures are never propagated upward.
pub async fn connect_or_degrade(
    server: &ToolServerConfig,
) -> (Vec<Arc<dyn Tool>>, ServerConnection) {
    match connect(server).await {
        Ok((tools, connection)) => {
            info!("connected to tool server, discovered {} tool(s)", tools.len());
            for tool in &tools {
                info!(tool = tool.name(), "discovered tool");
            }
            (tools, connection)
        }
        Err(e @ DiscoveryError::LauncherMissing(_)) => {
            error!("{e} — install uv (https://docs.astral.sh/uv/) to enable Reddit tools");
            (Vec::new(), ServerConnection::disconnected())
        }
        Err(e) => {
            error!("tool server discovery failed: {e} — continuing without Reddit tools");
            (Vec::new(), ServerConnection::disconnected())
        }
    }
}
