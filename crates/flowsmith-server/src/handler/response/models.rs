//! Response types for the model catalog handler.

use flowsmith_runtime::provider::ProviderFamily;
use serde::{Deserialize, Serialize};

/// Static catalog of the supported provider families and their models.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCatalogResponse {
    /// One entry per cataloged provider family.
    pub models: Vec<ProviderModelsResponse>,
}

/// Catalog entry for a single provider family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderModelsResponse {
    /// Display name of the provider family.
    pub provider: String,
    /// Models offered by this family.
    pub models: Vec<CatalogModelResponse>,
    /// Environment variable the generated backend reads the credential from.
    pub api_key_env: String,
}

/// A single catalog model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogModelResponse {
    /// Model identifier as accepted by the workflow editor.
    pub id: String,
    /// Human-readable model name.
    pub name: String,
}

impl ModelCatalogResponse {
    /// Builds the catalog from the cataloged provider families.
    pub fn catalog() -> Self {
        let models = ProviderFamily::CATALOGED
            .iter()
            .map(|family| ProviderModelsResponse {
                provider: family.display_name().to_owned(),
                models: family
                    .models()
                    .iter()
                    .map(|model| CatalogModelResponse {
                        id: model.id.to_owned(),
                        name: model.name.to_owned(),
                    })
                    .collect(),
                api_key_env: family.api_key_env().to_owned(),
            })
            .collect();

        Self { models }
    }
}
