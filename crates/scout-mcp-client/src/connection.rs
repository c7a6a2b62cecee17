// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! [`ServerConnection`] — the releasable handle over the tool-server session.
//!
//! Exactly one connection is produced per bootstrap run: a live one wrapping
//! the running MCP client service (and with it the child process), or the
//! no-op variant produced by every degraded path.  Both satisfy the same
//! lifecycle contract, so callers never branch on which one they hold.
//!
//! `close(self)` consumes the handle — releasing a connection twice does not
//! compile.

use anyhow::Context;
use rmcp::service::{RoleClient, RunningService};
use tracing::debug;

/// Handle over the live subprocess + channel, or a no-op stand-in.
pub struct ServerConnection {
    service: Option<RunningService<RoleClient, ()>>,
}

impl ServerConnection {
    /// Wrap a running client service.  Crate-internal: live connections only
    /// come out of discovery.
    pub(crate) fn live(service: RunningService<RoleClient, ()>) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// The shared no-op handle used by every degraded path.
    pub fn disconnected() -> Self {
        Self { service: None }
    }

    /// Whether this handle owns a live tool-server session.
    pub fn is_live(&self) -> bool {
        self.service.is_some()
    }

    /// Release the connection, terminating the tool-server child process.
    ///
    /// No-op on a disconnected handle.  Consumes `self`, so release happens
    /// at most once per handle.
    pub async fn close(self) -> anyhow::Result<()> {
        match self.service {
            Some(service) => {
                let reason = service
                    .cancel()
                    .await
                    .context("shutting down tool server connection")?;
                debug!(?reason, "tool server connection closed");
                Ok(())
            }
            None => Ok(()),
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disconnected_handle_is_not_live() {
        assert!(!ServerConnection::disconnected().is_live());
    }

    #[tokio::test]
    async fn disconnected_handle_closes_without_error() {
        ServerConnection::disconnected()
            .close()
            .await
            .expect("no-op close must succeed");
    }
}
