// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub server: ToolServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Provider identifier: "google" | "openai" | "anthropic"
    pub provider: String,
    /// Model name forwarded to the provider API
    pub name: String,
    /// Environment variable that holds the API key (read at runtime)
    pub api_key_env: Option<String>,
    /// Explicit API key; prefer api_key_env in config files to avoid secrets
    /// in version-controlled files
    pub api_key: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: "google".into(),
            name: "gemini-1.5-flash-latest".into(),
            // api_key_env is intentionally None here.  resolve_api_key() falls
            // through to the provider's conventional variable (GOOGLE_API_KEY,
            // OPENAI_API_KEY, ...) so a default config works with a plain
            // exported key and no config file at all.
            api_key_env: None,
            api_key: None,
        }
    }
}

impl ModelConfig {
    /// Conventional API-key environment variable for each known provider.
    fn conventional_key_env(&self) -> Option<&'static str> {
        match self.provider.as_str() {
            "google" => Some("GOOGLE_API_KEY"),
            "openai" => Some("OPENAI_API_KEY"),
            "anthropic" => Some("ANTHROPIC_API_KEY"),
            _ => None,
        }
    }

    /// Resolve the API key: explicit `api_key`, then the configured
    /// `api_key_env` variable, then the provider-conventional variable.
    ///
    /// Returns `None` when no key is configured anywhere.  A missing key is
    /// not an error at this layer — the agent still assembles and the model
    /// runtime rejects unauthenticated calls on its own.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        if let Some(var) = &self.api_key_env {
            if let Ok(key) = std::env::var(var) {
                if !key.is_empty() {
                    return Some(key);
                }
            }
        }
        self.conventional_key_env()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty())
    }
}

/// Launch parameters for the external MCP tool server.
///
/// The defaults encode the fixed launch contract: fetch the `mcp-reddit`
/// package from its upstream repository with `uvx` and execute its entry
/// point.  There are no CLI flags to override these; a config file may
/// replace them (e.g. to pin a local checkout during development).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolServerConfig {
    /// Launcher binary resolved on PATH
    #[serde(default = "ToolServerConfig::default_command")]
    pub command: String,
    /// Argument vector passed to the launcher
    #[serde(default = "ToolServerConfig::default_args")]
    pub args: Vec<String>,
    /// Extra environment variables for the server process (e.g. Reddit
    /// credentials, should the server ever require them)
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl ToolServerConfig {
    fn default_command() -> String {
        "uvx".into()
    }

    fn default_args() -> Vec<String> {
        vec![
            "--from".into(),
            "git+https://github.com/adhikasp/mcp-reddit.git".into(),
            "mcp-reddit".into(),
        ]
    }
}

impl Default for ToolServerConfig {
    fn default() -> Self {
        Self {
            command: Self::default_command(),
            args: Self::default_args(),
            env: HashMap::new(),
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
