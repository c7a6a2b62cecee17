use thiserror::Error;

/// Failure kinds surfaced by tool-server discovery.
///
/// Two kinds only: the launcher binary missing from PATH, and everything
/// else.  Neither variant escapes [`crate::connect_or_degrade`].
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("launcher command {0:?} not found on PATH")]
    LauncherMissing(String),

    #[error("tool server connection failed: {0}")]
    Connection(String),
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
