//! Workflow inspection and configuration extraction.

use super::Workflow;

/// Model applied when the LLM node does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// API key placeholder written into generated configuration when the
/// editor supplied none.
pub const DEFAULT_API_KEY: &str = "${GEMINI_API_KEY}";

/// Sampling temperature applied when the LLM node does not set one.
pub const DEFAULT_TEMPERATURE: &str = "0.7";

/// LLM configuration extracted from a workflow document.
///
/// Extraction looks at the first node of each relevant role only. Each
/// field falls back to its default independently when the editor left it
/// absent or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// Model identifier.
    pub model: String,
    /// API key; the editor's single credential is reused for every
    /// provider variable.
    pub api_key: String,
    /// Sampling temperature as text.
    pub temperature: String,
    /// Whether conversation memory is enabled.
    pub memory_enabled: bool,
    /// Whether the editor supplied a non-empty API key (drives the masked
    /// credential indicator; the raw value is never echoed).
    pub has_api_key: bool,
    /// First chat-input message, when present and non-empty.
    pub first_user_message: Option<String>,
}

impl WorkflowConfig {
    /// Extracts the configuration from the first chat-input and LLM nodes.
    ///
    /// A workflow without an LLM node yields the full default
    /// configuration with memory disabled; callers that require an LLM
    /// node check for one separately.
    #[must_use]
    pub fn from_workflow(workflow: &Workflow) -> Self {
        let data = workflow.first_llm().map(|node| &node.data);

        Self {
            model: field_or(data.and_then(|d| d.model.as_deref()), DEFAULT_MODEL),
            api_key: field_or(data.and_then(|d| d.api_key.as_deref()), DEFAULT_API_KEY),
            temperature: field_or(
                data.and_then(|d| d.temperature.as_deref()),
                DEFAULT_TEMPERATURE,
            ),
            memory_enabled: data.and_then(|d| d.memory).unwrap_or(false),
            has_api_key: data
                .and_then(|d| d.api_key.as_deref())
                .is_some_and(|key| !key.is_empty()),
            first_user_message: workflow
                .first_chat_input()
                .and_then(|node| node.data.message.as_deref())
                .filter(|message| !message.is_empty())
                .map(str::to_owned),
        }
    }
}

fn field_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => default.to_owned(),
    }
}
