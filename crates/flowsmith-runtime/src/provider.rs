//! Provider family classification and the static model catalog.

/// Model the generated adapter falls back to when it does not recognize
/// the configured identifier at runtime.
pub const FALLBACK_MODEL: &str = "gpt-4o";

/// Provider family inferred from a model identifier.
///
/// Classification happens once per generation; the rest of the pipeline
/// branches on the resulting tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderFamily {
    /// OpenAI chat models ("gpt" identifiers).
    OpenAi,
    /// Anthropic models ("claude" identifiers).
    Anthropic,
    /// Google models ("gemini" identifiers).
    Google,
    /// Open-weight models served through Hugging Face ("llama" or
    /// "mistral" identifiers).
    OpenWeight,
    /// Anything else; the generated adapter falls back to
    /// [`FALLBACK_MODEL`] at runtime and says so.
    Unknown,
}

impl ProviderFamily {
    /// Families present in the model catalog.
    pub const CATALOGED: [Self; 4] =
        [Self::OpenAi, Self::Anthropic, Self::Google, Self::OpenWeight];

    /// Classifies a model identifier by case-insensitive substring match.
    #[must_use]
    pub fn classify(model: &str) -> Self {
        let model = model.to_ascii_lowercase();
        if model.contains("gpt") {
            Self::OpenAi
        } else if model.contains("claude") {
            Self::Anthropic
        } else if model.contains("gemini") {
            Self::Google
        } else if model.contains("llama") || model.contains("mistral") {
            Self::OpenWeight
        } else {
            Self::Unknown
        }
    }

    /// Stable lowercase tag used in generated annotations and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::OpenWeight => "open-weight",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable provider name shown in the catalog.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::Google => "Google",
            Self::OpenWeight => "Hugging Face",
            Self::Unknown => "Unknown",
        }
    }

    /// Environment variable the family reads its credential from.
    ///
    /// Unrecognized identifiers keep the OpenAI variable, matching the
    /// generated adapter's runtime fallback.
    #[must_use]
    pub const fn api_key_env(&self) -> &'static str {
        match self {
            Self::OpenAi | Self::Unknown => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::Google => "GOOGLE_API_KEY",
            Self::OpenWeight => "HUGGINGFACEHUB_API_TOKEN",
        }
    }

    /// Catalog models offered for this family; empty for [`Self::Unknown`].
    #[must_use]
    pub const fn models(&self) -> &'static [CatalogModel] {
        match self {
            Self::OpenAi => OPENAI_MODELS,
            Self::Anthropic => ANTHROPIC_MODELS,
            Self::Google => GOOGLE_MODELS,
            Self::OpenWeight => OPEN_WEIGHT_MODELS,
            Self::Unknown => &[],
        }
    }
}

/// A selectable model in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogModel {
    /// Identifier passed through to the generated backend.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
}

const OPENAI_MODELS: &[CatalogModel] = &[
    CatalogModel { id: "gpt-4o", name: "GPT-4o" },
    CatalogModel { id: "gpt-4-turbo", name: "GPT-4 Turbo" },
    CatalogModel { id: "gpt-3.5-turbo", name: "GPT-3.5 Turbo" },
];

const ANTHROPIC_MODELS: &[CatalogModel] = &[
    CatalogModel { id: "claude-3-opus", name: "Claude 3 Opus" },
    CatalogModel { id: "claude-3-sonnet", name: "Claude 3 Sonnet" },
    CatalogModel { id: "claude-3-haiku", name: "Claude 3 Haiku" },
];

const GOOGLE_MODELS: &[CatalogModel] = &[CatalogModel { id: "gemini-2.0-flash", name: "Gemini" }];

const OPEN_WEIGHT_MODELS: &[CatalogModel] = &[
    CatalogModel { id: "meta-llama/Llama-2-70b-chat-hf", name: "Meta Llama 2 70B" },
    CatalogModel { id: "mistralai/Mistral-7B-Instruct-v0.2", name: "Mistral 7B Instruct" },
    CatalogModel { id: "google/gemma-7b-it", name: "Google Gemma 7B" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_matches_known_substrings() {
        assert_eq!(ProviderFamily::classify("gpt-4o"), ProviderFamily::OpenAi);
        assert_eq!(
            ProviderFamily::classify("claude-3-opus"),
            ProviderFamily::Anthropic
        );
        assert_eq!(
            ProviderFamily::classify("gemini-2.0-flash"),
            ProviderFamily::Google
        );
        assert_eq!(
            ProviderFamily::classify("meta-llama/Llama-2-70b-chat-hf"),
            ProviderFamily::OpenWeight
        );
        assert_eq!(
            ProviderFamily::classify("mistral-7b"),
            ProviderFamily::OpenWeight
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(ProviderFamily::classify("GPT-4O"), ProviderFamily::OpenAi);
        assert_eq!(
            ProviderFamily::classify("Claude-3-Haiku"),
            ProviderFamily::Anthropic
        );
    }

    #[test]
    fn unrecognized_identifier_is_unknown() {
        assert_eq!(ProviderFamily::classify("foo-model"), ProviderFamily::Unknown);
        assert_eq!(ProviderFamily::classify(""), ProviderFamily::Unknown);
    }

    #[test]
    fn every_cataloged_family_has_models_and_env_var() {
        for family in ProviderFamily::CATALOGED {
            assert!(!family.models().is_empty());
            assert!(family.api_key_env().ends_with("KEY") || family.api_key_env().ends_with("TOKEN"));
        }
    }

    #[test]
    fn unknown_family_borrows_the_openai_env_var() {
        assert_eq!(ProviderFamily::Unknown.api_key_env(), "OPENAI_API_KEY");
        assert!(ProviderFamily::Unknown.models().is_empty());
    }

    #[test]
    fn google_family_uses_the_google_env_var() {
        assert_eq!(ProviderFamily::Google.api_key_env(), "GOOGLE_API_KEY");
    }
}
