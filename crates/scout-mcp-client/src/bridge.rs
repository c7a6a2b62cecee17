// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Type conversions between rmcp's MCP model types and scout's tool types,
//! plus the [`McpTool`] adapter that lets the agent call a server-side tool
//! through the scout [`Tool`] trait.
//!
//! The bridge sits at the seam between the MCP wire protocol and the
//! [`scout_tools`] crate so neither side needs to know about the other.

use async_trait::async_trait;
use rmcp::{
    model::{CallToolRequestParams, CallToolResult, Tool as ToolInfo},
    service::{Peer, RoleClient},
};
use scout_tools::{Tool, ToolCall, ToolOutput, ToolSchema};
use serde_json::Value;

/// Convert an rmcp [`ToolInfo`] descriptor into a scout [`ToolSchema`].
///
/// The `input_schema` is already valid JSON Schema as reported by the
/// provider, so it passes through untouched.  A provider that omits the
/// description yields an empty string rather than an absent field.
pub fn tool_info_to_schema(info: &ToolInfo) -> ToolSchema {
    ToolSchema {
        name: info.name.to_string(),
        description: info.description.as_deref().unwrap_or_default().to_string(),
        parameters: Value::Object((*info.input_schema).clone()),
    }
}

/// Concatenate the text parts of a [`CallToolResult`].
///
/// Non-text content (images, embedded resources) is skipped; the Reddit
/// server only ever returns text.
pub fn call_result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A server-side tool exposed to the agent through the [`Tool`] trait.
///
/// Holds the descriptor captured at discovery time and a clone of the client
/// peer; `execute` forwards the call over the open channel.  Once the owning
/// [`crate::ServerConnection`] is closed, calls fail with a tool-level error
/// rather than a panic.
pub struct McpTool {
    schema: ToolSchema,
    peer: Peer<RoleClient>,
}

impl McpTool {
    pub fn new(info: &ToolInfo, peer: Peer<RoleClient>) -> Self {
        Self {
            schema: tool_info_to_schema(info),
            peer,
        }
    }
}

#[async_trait]
impl Tool for McpTool {
    fn name(&self) -> &str {
        &self.schema.name
    }

    fn description(&self) -> &str {
        &self.schema.description
    }

    fn parameters_schema(&self) -> Value {
        self.schema.parameters.clone()
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        let arguments = match call.args.clone() {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => {
                return ToolOutput::err(
                    &call.id,
                    format!("tool arguments must be a JSON object, got: {other}"),
                )
            }
        };

        let request = CallToolRequestParams {
            name: self.schema.name.clone().into(),
            arguments,
            meta: None,
            task: None,
        };

        match self.peer.call_tool(request).await {
            Ok(result) => {
                let text = call_result_text(&result);
                if result.is_error.unwrap_or(false) {
                    ToolOutput::err(&call.id, text)
                } else {
                    ToolOutput::ok(&call.id, text)
                }
            }
            Err(e) => ToolOutput::err(&call.id, format!("tool server call failed: {e}")),
        }
    }
}

// ─── Unit tests ───────────────────────────────────────────────────────────────
//
// These cover the pure conversion functions.  McpTool::execute needs a live
// peer and is exercised end-to-end in tests/integration.rs.
