//! Workflow node definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role tag of a workflow node.
///
/// The editor emits a small set of known tags; anything else round-trips
/// untouched through [`NodeType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    /// Chat input node carrying the user message.
    ChatInput,
    /// LLM configuration node.
    Llm,
    /// Output node displaying the response.
    Output,
    /// Any node tag this runtime does not interpret.
    #[serde(untagged)]
    Other(String),
}

impl NodeType {
    /// Whether this is a chat-input node.
    #[must_use]
    pub const fn is_chat_input(&self) -> bool {
        matches!(self, Self::ChatInput)
    }

    /// Whether this is an LLM node.
    #[must_use]
    pub const fn is_llm(&self) -> bool {
        matches!(self, Self::Llm)
    }
}

/// Editor-supplied node payload.
///
/// Every field is optional; keys this runtime does not interpret are
/// preserved in `extra` so the exported workflow snapshot reproduces the
/// editor document exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Display label shown on the canvas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// User message on chat-input nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Model identifier on LLM nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// API key on LLM nodes (single-credential shortcut).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Sampling temperature, kept as text the way the editor emits it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    /// Rendered response on output nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Whether conversation memory is enabled on LLM nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<bool>,
    /// Unrecognized keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A single node in the editor graph.
///
/// Canvas attributes the editor attaches next to `data` (position, size,
/// selection state) are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Unique node identifier.
    pub id: String,
    /// Role tag.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Editor-supplied payload.
    pub data: NodeData,
    /// Unrecognized node attributes, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_use_camel_case() {
        assert_eq!(
            serde_json::to_string(&NodeType::ChatInput).unwrap(),
            r#""chatInput""#
        );
        assert_eq!(serde_json::to_string(&NodeType::Llm).unwrap(), r#""llm""#);
        assert_eq!(
            serde_json::from_str::<NodeType>(r#""output""#).unwrap(),
            NodeType::Output
        );
    }

    #[test]
    fn unknown_tag_round_trips() {
        let parsed: NodeType = serde_json::from_str(r#""webhook""#).unwrap();
        assert_eq!(parsed, NodeType::Other("webhook".to_owned()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""webhook""#);
    }

    #[test]
    fn node_data_preserves_unknown_keys() {
        let raw = r#"{"apiKey": "sk-test", "position": {"x": 1, "y": 2}}"#;
        let data: NodeData = serde_json::from_str(raw).unwrap();

        assert_eq!(data.api_key.as_deref(), Some("sk-test"));
        assert!(data.extra.contains_key("position"));

        let reserialized = serde_json::to_value(&data).unwrap();
        assert_eq!(reserialized["apiKey"], "sk-test");
        assert_eq!(reserialized["position"]["x"], 1);
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let json = serde_json::to_string(&NodeData::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn numeric_temperature_is_rejected() {
        let result = serde_json::from_str::<NodeData>(r#"{"temperature": 0.7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn canvas_attributes_round_trip() {
        let raw = r#"{
          "id": "llm-1",
          "type": "llm",
          "position": {"x": 250.5, "y": 80},
          "selected": true,
          "data": {"model": "gpt-4o"}
        }"#;

        let node: WorkflowNode = serde_json::from_str(raw).unwrap();
        assert_eq!(node.node_type, NodeType::Llm);
        assert!(node.extra.contains_key("position"));

        let original: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_value(&node).unwrap(), original);
    }
}
