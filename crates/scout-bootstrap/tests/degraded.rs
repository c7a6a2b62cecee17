// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Degraded-mode bootstrap, end to end.
//!
//! Points the launch contract at a command that cannot exist on PATH and
//! runs the full [`initialize`] sequence: no error may escape, the agent
//! must assemble with zero tools, and the no-op handle must complete its
//! lifecycle like a real one.

use scout_bootstrap::{initialize, PRIMARY_TOOL};
use scout_config::Config;

fn config_with_bogus_launcher() -> Config {
    let mut config = Config::default();
    config.server.command = "scout-test-no-such-launcher".into();
    config.server.args = vec![];
    config
}

#[tokio::test]
async fn initialize_degrades_without_error() {
    let config = config_with_bogus_launcher();
    let (agent, connection) = initialize(&config).await;

    assert!(agent.tools.is_empty());
    assert!(!connection.is_live());
    connection.close().await.expect("no-op close must succeed");
}

#[tokio::test]
async fn degraded_agent_is_fully_formed() {
    let config = config_with_bogus_launcher();
    let (agent, connection) = initialize(&config).await;

    assert_eq!(agent.name, "reddit-scout");
    assert!(!agent.description.is_empty());
    assert_eq!(agent.model, config.model.name);
    // The instruction still references the expected tool by name.
    assert!(agent.instruction.contains(PRIMARY_TOOL));
    connection.close().await.expect("no-op close must succeed");
}
