// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Tool abstractions shared by the scout crates.
//!
//! Every capability the agent can call — today, exclusively tools discovered
//! from the external MCP server — implements the [`Tool`] trait.  The agent
//! assembler holds tools as `Arc<dyn Tool>` so discovered capabilities are
//! referenced, never copied.

mod tool;

pub use tool::{Tool, ToolCall, ToolOutput, ToolSchema};
