//! Editor workflow documents and configuration extraction.

mod edge;
mod inspect;
mod node;

pub use edge::WorkflowEdge;
pub use inspect::{DEFAULT_API_KEY, DEFAULT_MODEL, DEFAULT_TEMPERATURE, WorkflowConfig};
pub use node::{NodeData, NodeType, WorkflowNode};

use serde::{Deserialize, Serialize};

/// A workflow document as exported by the visual editor.
///
/// Both fields are required on the wire; a payload without them is
/// malformed. Edges are carried for round-trip fidelity only and are never
/// consulted by generation or execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    /// Nodes in canvas order.
    pub nodes: Vec<WorkflowNode>,
    /// Connections drawn between nodes.
    pub edges: Vec<WorkflowEdge>,
}

impl Workflow {
    /// Returns the first chat-input node, if any.
    #[must_use]
    pub fn first_chat_input(&self) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|node| node.node_type.is_chat_input())
    }

    /// Returns the first LLM node, if any.
    ///
    /// Later LLM nodes are ignored everywhere; first-match selection is
    /// the documented contract.
    #[must_use]
    pub fn first_llm(&self) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|node| node.node_type.is_llm())
    }

    /// Iterates over every chat-input node in canvas order.
    pub fn chat_inputs(&self) -> impl Iterator<Item = &WorkflowNode> {
        self.nodes.iter().filter(|node| node.node_type.is_chat_input())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn node(id: &str, node_type: NodeType) -> WorkflowNode {
        WorkflowNode {
            id: id.to_owned(),
            node_type,
            data: NodeData::default(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn first_match_selection_ignores_later_nodes() {
        let workflow = Workflow {
            nodes: vec![
                node("a", NodeType::Output),
                node("b", NodeType::Llm),
                node("c", NodeType::Llm),
                node("d", NodeType::ChatInput),
            ],
            edges: Vec::new(),
        };

        assert_eq!(workflow.first_llm().map(|n| n.id.as_str()), Some("b"));
        assert_eq!(workflow.first_chat_input().map(|n| n.id.as_str()), Some("d"));
        assert_eq!(workflow.chat_inputs().count(), 1);
    }

    #[test]
    fn missing_roles_yield_none() {
        let workflow = Workflow {
            nodes: vec![node("a", NodeType::Other("note".to_owned()))],
            edges: Vec::new(),
        };

        assert!(workflow.first_llm().is_none());
        assert!(workflow.first_chat_input().is_none());
    }

    #[test]
    fn document_without_nodes_field_is_rejected() {
        let result = serde_json::from_str::<Workflow>(r#"{"edges": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn document_round_trips_through_json() {
        let raw = r#"{
          "nodes": [
            {
              "id": "1",
              "type": "chatInput",
              "data": { "label": "Chat Input", "message": "hello" }
            },
            {
              "id": "2",
              "type": "llm",
              "data": { "model": "gpt-4o", "apiKey": "sk-test", "customKey": 7 }
            }
          ],
          "edges": [ { "id": "e1", "source": "1", "target": "2" } ]
        }"#;

        let workflow: Workflow = serde_json::from_str(raw).unwrap();
        let round_tripped: Workflow =
            serde_json::from_str(&serde_json::to_string(&workflow).unwrap()).unwrap();
        assert_eq!(workflow, round_tripped);

        let original: serde_json::Value = serde_json::from_str(raw).unwrap();
        let reserialized = serde_json::to_value(&workflow).unwrap();
        assert_eq!(original, reserialized);
    }
}
