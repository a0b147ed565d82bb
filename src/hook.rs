//! Hook wire format: the request read from stdin and the verdict written
//! to stdout.

use serde_json::{Map, Value};

use crate::eval::Verdict;

/// The only `tool_name` whose input is classified.
pub const SHELL_TOOL_NAME: &str = "Bash";

/// A PreToolUse request. Fields other than these are ignored.
#[derive(Debug, Default)]
pub struct HookInput {
    pub tool_name: Option<String>,
    pub tool_input: Option<Map<String, Value>>,
}

impl HookInput {
    pub fn is_shell_tool(&self) -> bool {
        self.tool_name.as_deref() == Some(SHELL_TOOL_NAME)
    }

    /// `tool_input.command`, or `""` when it is absent or not a string.
    pub fn command(&self) -> &str {
        self.tool_input
            .as_ref()
            .and_then(|input| input.get("command"))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// Decode a request. Callers treat an error as "continue".
///
/// The top level must be a JSON object. A repeated key keeps its last
/// value. A `tool_name` that is not a string or a `tool_input` that is not
/// an object is read as absent.
pub fn parse_input(text: &str) -> Result<HookInput, serde_json::Error> {
    let mut fields: Map<String, Value> = serde_json::from_str(text)?;
    let tool_name = match fields.remove("tool_name") {
        Some(Value::String(name)) => Some(name),
        _ => None,
    };
    let tool_input = match fields.remove("tool_input") {
        Some(Value::Object(input)) => Some(input),
        _ => None,
    };
    Ok(HookInput {
        tool_name,
        tool_input,
    })
}

impl Verdict {
    /// The hook response object for this verdict.
    pub fn to_json(&self) -> Value {
        match self {
            Verdict::Continue => serde_json::json!({ "continue": true }),
            Verdict::Block { reason } => serde_json::json!({
                "decision": "block",
                "reason": reason,
            }),
        }
    }
}

/// Serialize a verdict as a single line of JSON.
pub fn render(verdict: &Verdict) -> String {
    verdict.to_json().to_string()
}
