// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Instruction text for the Reddit scout agent.

/// Tool name the instruction tells the model to call.
///
/// The Reddit server reports this name at discovery time; assembly warns when
/// the discovered set disagrees (a renamed upstream tool would otherwise fail
/// silently at conversation time).
pub const PRIMARY_TOOL: &str = "fetch_reddit_hot_threads";

/// Build the agent instruction, interpolating the expected tool name.
///
/// The text is generated unconditionally — also when discovery degraded to
/// zero tools.  Rule 4 covers that case: the agent truthfully reports the
/// configuration issue instead of inventing content.
pub fn scout_instruction(primary_tool: &str) -> String {
    format!(
        "You are the Reddit News Scout. Your task is to fetch hot post titles \
         from discussion subreddits using the connected Reddit tool.\n\
         1. Identify the subreddit: determine which subreddit the user wants \
         news from. Default to 'gamedev' if none is specified; otherwise use \
         the subreddit the user names (e.g. 'unity3d', 'unrealengine').\n\
         2. Call the discovered tool: you MUST look for and call the tool \
         named '{primary_tool}' with the identified subreddit name and \
         optionally a limit.\n\
         3. Present results: the tool returns a formatted string with the hot \
         post information or an error message. Present that string directly \
         to the user and clearly state which subreddit it is from. If the \
         tool returns an error message, relay it accurately.\n\
         4. Handle the missing tool: if you cannot find the required Reddit \
         tool, inform the user that you cannot fetch Reddit news due to a \
         configuration issue.\n\
         5. Do not hallucinate: only provide information returned by the tool."
    )
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_interpolates_tool_name() {
        let text = scout_instruction(PRIMARY_TOOL);
        assert!(text.contains("'fetch_reddit_hot_threads'"));
    }

    #[test]
    fn instruction_defaults_to_gamedev() {
        let text = scout_instruction(PRIMARY_TOOL);
        assert!(text.contains("'gamedev'"));
    }

    #[test]
    fn instruction_covers_the_missing_tool_case() {
        let text = scout_instruction(PRIMARY_TOOL);
        assert!(text.contains("configuration issue"));
    }
}
