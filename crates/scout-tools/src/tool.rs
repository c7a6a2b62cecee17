use async_trait::async_trait;
use serde_json::Value;

/// A single tool invocation requested by the model.
#[derive(Debug, Clone)]
pub struct ToolCall {
    /// Opaque identifier returned by the model (forwarded verbatim)
    pub id: String,
    pub name: String,
    /// Parsed JSON arguments
    pub args: Value,
}

/// The result of executing a tool.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub call_id: String,
    /// Plain-text content returned to the model.
    pub content: String,
    /// If true, the tool execution failed non-fatally (returned error message).
    pub is_error: bool,
}

impl ToolOutput {
    /// Successful plain-text result.
    pub fn ok(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: content.into(),
            is_error: false,
        }
    }

    /// Error result containing a plain-text error message.
    pub fn err(call_id: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: msg.into(),
            is_error: true,
        }
    }
}

/// A tool's invocation contract: name, human-readable description, and the
/// JSON Schema of its parameters.  Opaque to this layer — schemas come from
/// the external provider and are forwarded to the model untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Trait implemented by every capability available to the agent.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// JSON Schema for parameters
    fn parameters_schema(&self) -> Value;
    /// Execute the tool.  Errors should be wrapped in [`ToolOutput::err`].
    async fn execute(&self, call: &ToolCall) -> ToolOutput;
}

impl dyn Tool {
    /// The invocation contract of this tool as a standalone descriptor.
    pub fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Minimal echo tool used as a trait fixture.
    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "echoes its input"
        }
        fn parameters_schema(&self) -> Value {
            json!({ "type": "object" })
        }
        async fn execute(&self, call: &ToolCall) -> ToolOutput {
            ToolOutput::ok(&call.id, format!("echo:{}", call.args))
        }
    }

    #[test]
    fn ok_output_is_not_error() {
        let out = ToolOutput::ok("1", "fine");
        assert!(!out.is_error);
        assert_eq!(out.content, "fine");
        assert_eq!(out.call_id, "1");
    }

    #[test]
    fn err_output_sets_flag() {
        let out = ToolOutput::err("2", "boom");
        assert!(out.is_error);
        assert_eq!(out.content, "boom");
    }

    #[test]
    fn schema_mirrors_trait_accessors() {
        let tool: &dyn Tool = &EchoTool;
        let schema = tool.schema();
        assert_eq!(schema.name, "echo");
        assert_eq!(schema.description, "echoes its input");
        assert_eq!(schema.parameters, json!({ "type": "object" }));
    }

    #[tokio::test]
    async fn execute_round_trip() {
        let tool = EchoTool;
        let call = ToolCall {
            id: "x".into(),
            name: "echo".into(),
            args: json!({"a": 1}),
        };
        let out = tool.execute(&call).await;
        assert!(!out.is_error);
        assert!(out.content.starts_with("echo:"));
        assert_eq!(out.call_id, "x");
    }
}
