//! Backend source bundle generation.

mod templates;

pub use templates::WORKFLOW_SNAPSHOT_PATH;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::TRACING_TARGET;
use crate::error::WorkflowResult;
use crate::provider::ProviderFamily;
use crate::workflow::{Workflow, WorkflowConfig};

/// Number of artifacts in every generated bundle.
pub const ARTIFACT_COUNT: usize = templates::ARTIFACT_TEMPLATES.len() + 1;

/// A generated artifact: archive-relative path plus full text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Archive-relative path, `/`-separated.
    pub path: String,
    /// Complete file content.
    pub content: String,
}

impl GeneratedFile {
    /// Creates an artifact from a path and its content.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Renders the backend source bundle for a workflow.
///
/// Owns the artifact template environment; build one at startup and share
/// it through application state.
#[derive(Debug, Clone)]
pub struct BackendGenerator {
    env: Environment<'static>,
}

impl BackendGenerator {
    /// Creates a generator with every artifact template registered.
    ///
    /// # Panics
    ///
    /// Panics if a built-in template fails to parse, which is a packaging
    /// defect rather than a runtime condition.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for (name, source) in templates::ARTIFACT_TEMPLATES {
            env.add_template(name, source)
                .expect("built-in artifact template must parse");
        }
        Self { env }
    }

    /// Generates the ordered artifact list for `workflow`.
    ///
    /// The path set is fixed regardless of field values and of the memory
    /// flag; identical workflows produce identical artifacts, and the
    /// verbatim workflow snapshot always comes last.
    #[tracing::instrument(skip_all, fields(nodes = workflow.nodes.len()))]
    pub fn generate(&self, workflow: &Workflow) -> WorkflowResult<Vec<GeneratedFile>> {
        let config = WorkflowConfig::from_workflow(workflow);
        let family = ProviderFamily::classify(&config.model);

        tracing::debug!(
            target: TRACING_TARGET,
            model = %config.model,
            family = family.kind(),
            memory = config.memory_enabled,
            "generating backend artifacts"
        );

        let ctx = context! {
            model => config.model,
            api_key => config.api_key,
            temperature => config.temperature,
            use_memory => config.memory_enabled,
            provider_family => family.kind(),
        };

        let mut files = Vec::with_capacity(ARTIFACT_COUNT);
        for (name, _) in templates::ARTIFACT_TEMPLATES {
            let content = self.env.get_template(name)?.render(ctx.clone())?;
            files.push(GeneratedFile::new(name, content));
        }
        files.push(GeneratedFile::new(
            templates::WORKFLOW_SNAPSHOT_PATH,
            serde_json::to_string_pretty(workflow)?,
        ));
        Ok(files)
    }
}

impl Default for BackendGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::workflow::{
        DEFAULT_API_KEY, DEFAULT_MODEL, DEFAULT_TEMPERATURE, NodeData, NodeType, WorkflowNode,
    };

    fn llm_workflow(data: NodeData) -> Workflow {
        Workflow {
            nodes: vec![WorkflowNode {
                id: "1".to_owned(),
                node_type: NodeType::Llm,
                data,
                extra: BTreeMap::new(),
            }],
            edges: Vec::new(),
        }
    }

    fn memory_workflow(enabled: bool) -> Workflow {
        llm_workflow(NodeData {
            memory: Some(enabled),
            ..NodeData::default()
        })
    }

    fn find<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
        &files
            .iter()
            .find(|file| file.path == path)
            .unwrap_or_else(|| panic!("missing artifact {path}"))
            .content
    }

    #[test]
    fn default_substitution_for_empty_llm_node() {
        let generator = BackendGenerator::new();
        let files = generator.generate(&llm_workflow(NodeData::default())).unwrap();

        let adapter = find(&files, "services/llm_service.py");
        assert!(adapter.contains(r#"model="gemini-2.0-flash""#));
        assert!(adapter.contains(r#"api_key="${GEMINI_API_KEY}""#));
        assert!(adapter.contains("temperature=0.7"));
        assert!(adapter.contains(r#"use_memory="false""#));
    }

    #[test]
    fn explicit_values_are_substituted_everywhere() {
        let generator = BackendGenerator::new();
        let files = generator
            .generate(&llm_workflow(NodeData {
                model: Some("gpt-4o".to_owned()),
                api_key: Some("sk-test".to_owned()),
                temperature: Some("0.5".to_owned()),
                ..NodeData::default()
            }))
            .unwrap();

        let adapter = find(&files, "services/llm_service.py");
        assert!(adapter.contains(r#"model="gpt-4o""#));
        assert!(adapter.contains("temperature=0.5"));

        let env_file = find(&files, ".env");
        assert!(env_file.contains("OPENAI_API_KEY=sk-test"));
        assert!(env_file.contains("ANTHROPIC_API_KEY=sk-test"));
        assert!(env_file.contains("GOOGLE_API_KEY=sk-test"));
        assert!(env_file.contains("HUGGINGFACEHUB_API_TOKEN=sk-test"));
        assert!(env_file.contains("PORT=5000"));
    }

    #[test]
    fn provider_family_annotation_follows_the_model() {
        let generator = BackendGenerator::new();
        let annotation = |model: &str| {
            let files = generator
                .generate(&llm_workflow(NodeData {
                    model: Some(model.to_owned()),
                    ..NodeData::default()
                }))
                .unwrap();
            find(&files, "services/llm_service.py")
                .lines()
                .find(|line| line.starts_with("# Provider family:"))
                .unwrap()
                .to_owned()
        };

        assert_eq!(annotation("gpt-4o"), "# Provider family: openai");
        assert_eq!(annotation("claude-3-haiku"), "# Provider family: anthropic");
        assert_eq!(annotation("gemini-2.0-flash"), "# Provider family: google");
        assert_eq!(annotation("mistral-7b"), "# Provider family: open-weight");
        assert_eq!(annotation("foo-model"), "# Provider family: unknown");
    }

    #[test]
    fn unknown_model_keeps_the_runtime_fallback_notice() {
        let generator = BackendGenerator::new();
        let files = generator
            .generate(&llm_workflow(NodeData {
                model: Some("foo-model".to_owned()),
                ..NodeData::default()
            }))
            .unwrap();

        let adapter = find(&files, "services/llm_service.py");
        assert!(adapter.contains("Model type not recognized"));
        assert!(adapter.contains("Defaulting to gpt-4o"));
    }

    #[test]
    fn generation_without_llm_node_uses_defaults() {
        let generator = BackendGenerator::new();
        let files = generator.generate(&Workflow::default()).unwrap();

        assert_eq!(files.len(), ARTIFACT_COUNT);
        let adapter = find(&files, "services/llm_service.py");
        assert!(adapter.contains(DEFAULT_MODEL));
        assert!(adapter.contains(DEFAULT_API_KEY));
        assert!(adapter.contains(DEFAULT_TEMPERATURE));
    }

    #[test]
    fn memory_flag_toggles_the_clear_memory_route() {
        let generator = BackendGenerator::new();

        let with_memory = generator.generate(&memory_workflow(true)).unwrap();
        let routes = find(&with_memory, "routes/workflow_routes.py");
        assert!(routes.contains("/clear-memory"));
        assert!(routes.contains("clear_conversation_history"));

        let without_memory = generator.generate(&memory_workflow(false)).unwrap();
        let routes = find(&without_memory, "routes/workflow_routes.py");
        assert!(!routes.contains("/clear-memory"));
        assert!(routes.contains("/execute"));
    }

    #[test]
    fn memory_wording_flips_in_readme_and_executor() {
        let generator = BackendGenerator::new();

        let with_memory = generator.generate(&memory_workflow(true)).unwrap();
        let readme = find(&with_memory, "README.md");
        assert!(readme.contains("Memory is currently **enabled**."));
        assert!(!readme.contains("Memory is currently **disabled**."));
        assert!(readme.contains("### Memory API Endpoints"));
        let executor = find(&with_memory, "utils/workflow_executor.py");
        assert!(executor.contains("conversation memory"));
        assert!(!executor.contains("stateless request"));

        let without_memory = generator.generate(&memory_workflow(false)).unwrap();
        let readme = find(&without_memory, "README.md");
        assert!(readme.contains("Memory is currently **disabled**."));
        assert!(!readme.contains("Memory is currently **enabled**."));
        assert!(!readme.contains("### Memory API Endpoints"));
        let executor = find(&without_memory, "utils/workflow_executor.py");
        assert!(executor.contains("stateless request"));
        assert!(!executor.contains("conversation memory"));
    }

    #[test]
    fn memory_literal_is_a_lowercase_token() {
        let generator = BackendGenerator::new();

        let enabled = generator.generate(&memory_workflow(true)).unwrap();
        assert!(find(&enabled, "services/llm_service.py").contains(r#"use_memory="true""#));

        let disabled = generator.generate(&memory_workflow(false)).unwrap();
        assert!(find(&disabled, "services/llm_service.py").contains(r#"use_memory="false""#));
    }

    #[test]
    fn artifact_paths_are_fixed_and_snapshot_comes_last() {
        let generator = BackendGenerator::new();
        let expected = [
            "app.py",
            "routes/workflow_routes.py",
            "services/llm_service.py",
            "utils/workflow_executor.py",
            "requirements.txt",
            ".env",
            ".gitignore",
            "README.md",
            "workflow.json",
        ];

        for workflow in [memory_workflow(true), memory_workflow(false), Workflow::default()] {
            let files = generator.generate(&workflow).unwrap();
            let paths: Vec<&str> = files.iter().map(|file| file.path.as_str()).collect();
            assert_eq!(paths, expected);
        }
    }

    #[test]
    fn identical_workflows_generate_identical_artifacts() {
        let generator = BackendGenerator::new();
        let workflow = llm_workflow(NodeData {
            model: Some("claude-3-sonnet".to_owned()),
            memory: Some(true),
            ..NodeData::default()
        });

        let first = generator.generate(&workflow).unwrap();
        let second = generator.generate(&workflow).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn workflow_snapshot_round_trips_verbatim() {
        let generator = BackendGenerator::new();
        let workflow = llm_workflow(NodeData {
            model: Some("gpt-4o".to_owned()),
            extra: [("position".to_owned(), serde_json::json!({"x": 3}))]
                .into_iter()
                .collect(),
            ..NodeData::default()
        });

        let files = generator.generate(&workflow).unwrap();
        let snapshot = find(&files, WORKFLOW_SNAPSHOT_PATH);
        let parsed: Workflow = serde_json::from_str(snapshot).unwrap();
        assert_eq!(parsed, workflow);
    }

    #[test]
    fn generated_python_keeps_the_history_cap() {
        let generator = BackendGenerator::new();
        let files = generator.generate(&memory_workflow(true)).unwrap();

        let adapter = find(&files, "services/llm_service.py");
        assert!(adapter.contains("MAX_HISTORY_MESSAGES = 20"));
        assert!(adapter.contains("self.chat_history[-MAX_HISTORY_MESSAGES:]"));
    }
}
