//! Simulated workflow execution and the markdown export report.

use std::time::Duration;

use crate::TRACING_TARGET;
use crate::codegen::GeneratedFile;
use crate::error::{WorkflowError, WorkflowResult};
use crate::session::{ChatMessage, ChatRole, SessionStore};
use crate::workflow::{Workflow, WorkflowConfig};

/// Delay applied to simulated responses by default.
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Result of one simulated workflow execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedExecution {
    /// Echo of the caller's input.
    pub input: String,
    /// Simulated model response.
    pub output: String,
    /// Model the response claims to come from.
    pub model: String,
    /// Whether conversation memory was in effect.
    pub has_memory: bool,
}

/// Produces simulated chat executions and export reports.
///
/// No language-model provider is ever called. Responses are deterministic
/// functions of the workflow, the input and the session history; the only
/// non-determinism is the configurable response delay.
#[derive(Debug, Clone)]
pub struct ExecutionSimulator {
    response_delay: Duration,
}

impl ExecutionSimulator {
    /// Creates a simulator with the default response delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_RESPONSE_DELAY)
    }

    /// Creates a simulator with a custom response delay; zero disables
    /// the pause.
    #[must_use]
    pub fn with_delay(response_delay: Duration) -> Self {
        Self { response_delay }
    }

    /// Simulates executing `workflow` against `input` for `session_id`.
    ///
    /// This is the one place a missing LLM node is a hard error; every
    /// other part of the pipeline falls back to defaults. With memory
    /// enabled the exchange is recorded in `sessions` after the response
    /// is composed, and the configuration (including the model default)
    /// comes from the same extraction the generator uses.
    #[tracing::instrument(skip_all, fields(session = session_id))]
    pub async fn execute(
        &self,
        workflow: &Workflow,
        input: &str,
        session_id: &str,
        sessions: &SessionStore,
    ) -> WorkflowResult<SimulatedExecution> {
        if workflow.first_llm().is_none() {
            return Err(WorkflowError::MissingLlmNode);
        }
        let config = WorkflowConfig::from_workflow(workflow);

        let prior = if config.memory_enabled {
            sessions.history(session_id).await
        } else {
            Vec::new()
        };

        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }

        let output = compose_response(&config, input, &prior);
        if config.memory_enabled {
            sessions
                .append_exchange(session_id, input, output.clone())
                .await;
        }

        tracing::debug!(
            target: TRACING_TARGET,
            model = %config.model,
            memory = config.memory_enabled,
            "simulated workflow execution"
        );

        Ok(SimulatedExecution {
            input: input.to_owned(),
            output,
            model: config.model,
            has_memory: config.memory_enabled,
        })
    }

    /// Renders the markdown export report for `workflow`.
    ///
    /// `manifest` lists the artifacts included in the archive. The report
    /// never fails: a workflow without the expected nodes simply says so.
    /// Credentials appear only as a masked present/absent indicator.
    #[must_use]
    pub fn report(&self, workflow: &Workflow, manifest: &[GeneratedFile]) -> String {
        let config = WorkflowConfig::from_workflow(workflow);
        let mut report = String::from("# Workflow Execution Results\n\n");

        let mut chat_inputs = workflow.chat_inputs().peekable();
        if chat_inputs.peek().is_none() {
            report.push_str("No chat input nodes found in the workflow.\n");
        } else {
            report.push_str("## Input Messages:\n");
            for node in chat_inputs {
                let message = node
                    .data
                    .message
                    .as_deref()
                    .filter(|message| !message.is_empty())
                    .unwrap_or("Empty message");
                report.push_str(&format!("- \"{message}\"\n"));
            }
        }

        if workflow.first_llm().is_none() {
            report.push_str("\nNo LLM nodes found in the workflow.\n");
        } else {
            report.push_str("\n## LLM Configuration:\n");
            report.push_str(&format!("- Model: {}\n", config.model));
            report.push_str(&format!("- Temperature: {}\n", config.temperature));
            report.push_str(&format!(
                "- API Key: {}\n",
                if config.has_api_key { "********" } else { "Not provided" }
            ));

            report.push_str("\n## Generated Response:\n");
            match &config.first_user_message {
                Some(message) => {
                    report.push_str(&format!("This is a simulated response to: \"{message}\"\n\n"));
                    report.push_str(
                        "In a real implementation, this would be the actual response from the LLM API using Langchain.\n",
                    );
                }
                None => report.push_str("No input message provided to generate a response.\n"),
            }
        }

        report.push_str("\n## Backend Code Generation:\n");
        report.push_str("The following files have been generated and included in the ZIP file:\n");
        for file in manifest {
            report.push_str(&format!("- {}\n", file.path));
        }

        report.push_str("\n## Langchain Integration:\n");
        report.push_str(
            "The backend uses Langchain to provide a consistent interface for working with different language models:\n",
        );
        report.push_str("- OpenAI models (GPT-4o, GPT-3.5-turbo)\n");
        report.push_str("- Anthropic models (Claude)\n");
        report.push_str("- Open source models via Hugging Face (Llama, Mistral)\n");
        report.push_str("- And many more!\n\n");
        report.push_str("This allows you to easily switch between models without changing your code.\n");

        report
    }
}

impl Default for ExecutionSimulator {
    fn default() -> Self {
        Self::new()
    }
}

fn compose_response(config: &WorkflowConfig, input: &str, prior: &[ChatMessage]) -> String {
    let mut response = format!(
        "This is a simulated response from {} to your input: \"{input}\".\n\n",
        config.model
    );

    if config.memory_enabled && !prior.is_empty() {
        response.push_str(&format!(
            "I notice this is message #{} in our conversation. ",
            prior.len() / 2 + 1
        ));
        if let Some(previous) = prior.iter().rev().find(|entry| entry.role == ChatRole::User) {
            let preview: String = previous.content.chars().take(30).collect();
            response.push_str(&format!("Earlier you asked about \"{preview}...\". "));
        }
        response.push_str("\n\nWith memory enabled, I'm maintaining the full conversation context.");
    } else if !config.memory_enabled {
        response.push_str(
            "\n\nMemory is currently disabled, so I'm treating this as an independent message without conversation context.",
        );
    }

    let (langchain_mode, step_two, step_three, summary, download_note) = if config.memory_enabled {
        (
            "memory enabled",
            "Add it to the conversation history",
            "Send the full conversation context to the LLM",
            "With memory enabled, the LLM can reference previous messages and maintain context throughout the conversation.",
            "memory support",
        )
    } else {
        (
            "no memory",
            "Process it independently",
            "Send only the current message to the LLM",
            "Without memory, each message is treated independently, which can be more efficient for stateless applications.",
            "optional memory support",
        )
    };

    response.push_str(&format!(
        "\n\nIn a real implementation, this would be the actual response from the LLM API \
         using Langchain with {langchain_mode}.\n\n\
         The workflow execution would:\n\
         1. Take your input message\n\
         2. {step_two}\n\
         3. {step_three}\n\
         4. Return the generated response\n\n\
         {summary}\n\n\
         You can download the generated backend code to see the Langchain implementation \
         with {download_note}."
    ));

    response
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::workflow::{NodeData, NodeType, WorkflowNode};

    fn simulator() -> ExecutionSimulator {
        ExecutionSimulator::with_delay(Duration::ZERO)
    }

    fn workflow(nodes: Vec<WorkflowNode>) -> Workflow {
        Workflow {
            nodes,
            edges: Vec::new(),
        }
    }

    fn llm_node(data: NodeData) -> WorkflowNode {
        WorkflowNode {
            id: "llm".to_owned(),
            node_type: NodeType::Llm,
            data,
            extra: BTreeMap::new(),
        }
    }

    fn chat_node(message: &str) -> WorkflowNode {
        WorkflowNode {
            id: "chat".to_owned(),
            node_type: NodeType::ChatInput,
            data: NodeData {
                message: Some(message.to_owned()),
                label: Some("Chat Input".to_owned()),
                ..NodeData::default()
            },
            extra: BTreeMap::new(),
        }
    }

    fn memory_workflow() -> Workflow {
        workflow(vec![llm_node(NodeData {
            model: Some("gpt-4o".to_owned()),
            memory: Some(true),
            ..NodeData::default()
        })])
    }

    #[tokio::test]
    async fn missing_llm_node_is_a_hard_error() {
        let sessions = SessionStore::new();
        let result = simulator()
            .execute(&workflow(vec![chat_node("hi")]), "hi", "default", &sessions)
            .await;

        assert!(matches!(result, Err(WorkflowError::MissingLlmNode)));
        assert!(sessions.history("default").await.is_empty());
    }

    #[tokio::test]
    async fn model_default_matches_the_generator_extraction() {
        let sessions = SessionStore::new();
        let execution = simulator()
            .execute(
                &workflow(vec![llm_node(NodeData::default())]),
                "hello",
                "default",
                &sessions,
            )
            .await
            .unwrap();

        assert_eq!(execution.model, "gemini-2.0-flash");
        assert!(execution.output.contains("simulated response from gemini-2.0-flash"));
        assert!(!execution.has_memory);
    }

    #[tokio::test]
    async fn memoryless_execution_does_not_touch_the_session() {
        let sessions = SessionStore::new();
        let execution = simulator()
            .execute(
                &workflow(vec![llm_node(NodeData {
                    model: Some("gpt-4o".to_owned()),
                    ..NodeData::default()
                })]),
                "hello",
                "default",
                &sessions,
            )
            .await
            .unwrap();

        assert!(execution.output.contains("Memory is currently disabled"));
        assert!(execution.output.contains("no memory"));
        assert!(sessions.history("default").await.is_empty());
    }

    #[tokio::test]
    async fn first_memory_exchange_has_no_backreference() {
        let sessions = SessionStore::new();
        let execution = simulator()
            .execute(&memory_workflow(), "first question", "s1", &sessions)
            .await
            .unwrap();

        assert!(!execution.output.contains("message #"));
        assert!(execution.output.contains("memory enabled"));
        assert!(execution.has_memory);
        assert_eq!(sessions.history("s1").await.len(), 2);
    }

    #[tokio::test]
    async fn later_memory_exchanges_number_and_quote_history() {
        let sessions = SessionStore::new();
        let sim = simulator();
        let flow = memory_workflow();

        sim.execute(&flow, "tell me about rust lifetimes please", "s1", &sessions)
            .await
            .unwrap();
        let second = sim.execute(&flow, "and what about traits?", "s1", &sessions)
            .await
            .unwrap();

        assert!(second.output.contains("message #2 in our conversation"));
        assert!(second
            .output
            .contains("Earlier you asked about \"tell me about rust lifetimes p...\""));
        assert!(second.output.contains("With memory enabled"));
        assert_eq!(sessions.history("s1").await.len(), 4);
    }

    #[tokio::test]
    async fn report_masks_credentials_and_lists_the_manifest() {
        let sessions_workflow = workflow(vec![
            chat_node("What is the weather?"),
            llm_node(NodeData {
                model: Some("gpt-4o".to_owned()),
                api_key: Some("sk-secret".to_owned()),
                temperature: Some("0.5".to_owned()),
                ..NodeData::default()
            }),
        ]);
        let manifest = vec![
            GeneratedFile::new("app.py", ""),
            GeneratedFile::new("workflow.json", ""),
        ];

        let report = simulator().report(&sessions_workflow, &manifest);
        assert!(report.contains("# Workflow Execution Results"));
        assert!(report.contains("- \"What is the weather?\""));
        assert!(report.contains("- Model: gpt-4o"));
        assert!(report.contains("- Temperature: 0.5"));
        assert!(report.contains("- API Key: ********"));
        assert!(!report.contains("sk-secret"));
        assert!(report.contains("This is a simulated response to: \"What is the weather?\""));
        assert!(report.contains("- app.py"));
        assert!(report.contains("- workflow.json"));
    }

    #[tokio::test]
    async fn report_notes_missing_nodes_instead_of_failing() {
        let report = simulator().report(&Workflow::default(), &[]);
        assert!(report.contains("No chat input nodes found in the workflow."));
        assert!(report.contains("No LLM nodes found in the workflow."));
    }

    #[tokio::test]
    async fn report_uses_defaults_and_masked_absent_key() {
        let report = simulator().report(
            &workflow(vec![chat_node(""), llm_node(NodeData::default())]),
            &[],
        );

        assert!(report.contains("- \"Empty message\""));
        assert!(report.contains("- Model: gemini-2.0-flash"));
        assert!(report.contains("- Temperature: 0.7"));
        assert!(report.contains("- API Key: Not provided"));
        assert!(report.contains("No input message provided to generate a response."));
    }
}
