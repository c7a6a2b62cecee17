//! Agent construction factory.
//!
//! This crate consolidates the bootstrap sequence: tool discovery (with its
//! degraded-mode fallback) followed by assembly of the immutable
//! [`AgentDefinition`].  The [`initialize`] entry point is the one function
//! an external runner calls; it returns the definition paired with the
//! [`ServerConnection`](scout_mcp_client::ServerConnection) the runner must
//! release at teardown.

pub mod agent;
pub mod prompts;

pub use agent::{assemble, initialize, AgentDefinition};
pub use prompts::{scout_instruction, PRIMARY_TOOL};
