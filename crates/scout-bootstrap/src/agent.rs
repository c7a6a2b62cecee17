// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! [`AgentDefinition`] and the [`initialize`] entry point.
//!
//! Assembly is infallible by construction: discovery failures are absorbed
//! by the degraded-mode fallback before this layer runs, so the definition
//! always carries a well-formed (possibly empty) tool set and the caller
//! always receives a releasable connection handle.

use std::sync::Arc;

use scout_config::Config;
use scout_mcp_client::{connect_or_degrade, ServerConnection};
use scout_tools::{Tool, ToolSchema};
use tracing::warn;

use crate::prompts::{scout_instruction, PRIMARY_TOOL};

/// The assembled agent: fixed identity plus the discovered capability set.
///
/// Constructed exactly once per process run and immutable thereafter.
/// `tools` is always present — empty in degraded mode, never absent — so
/// consumers branch on emptiness, not existence.
pub struct AgentDefinition {
    pub name: String,
    pub description: String,
    /// Model identifier forwarded to the model runtime
    pub model: String,
    pub instruction: String,
    pub tools: Vec<Arc<dyn Tool>>,
}

impl AgentDefinition {
    /// Names of the discovered tools, in provider order.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    /// Invocation contracts of the discovered tools, in provider order.
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|t| t.as_ref().schema()).collect()
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name() == name)
    }
}

/// Build the [`AgentDefinition`] from configuration and a discovered tool set.
///
/// Warns when the set is empty (the agent cannot satisfy its primary purpose)
/// and when it is non-empty but missing the tool the instruction names (an
/// upstream rename would otherwise surface only as model confusion at
/// conversation time).  Neither condition fails assembly.
pub fn assemble(config: &Config, tools: Vec<Arc<dyn Tool>>) -> AgentDefinition {
    if tools.is_empty() {
        warn!("no tools discovered from the tool server — the agent will lack Reddit functionality");
    } else if !tools.iter().any(|t| t.name() == PRIMARY_TOOL) {
        warn!(
            expected = PRIMARY_TOOL,
            found = ?tools.iter().map(|t| t.name()).collect::<Vec<_>>(),
            "tool server did not report the tool the instruction names"
        );
    }

    AgentDefinition {
        name: "reddit-scout".into(),
        description: "A Reddit scout agent that searches for hot posts in a given \
                      subreddit using an external Reddit tool server."
            .into(),
        model: config.model.name.clone(),
        instruction: scout_instruction(PRIMARY_TOOL),
        tools,
    }
}

/// Bootstrap the agent: discover tools (degrading on any failure) and
/// assemble the definition.
///
/// This is the single explicit entry point for an external runner.  Call it
/// exactly once per process; the returned [`ServerConnection`] is owned by
/// the caller and must be `close()`d when the agent's lifetime ends.
pub async fn initialize(config: &Config) -> (AgentDefinition, ServerConnection) {
    let (tools, connection) = connect_or_degrade(&config.server).await;
    (assemble(config, tools), connection)
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
