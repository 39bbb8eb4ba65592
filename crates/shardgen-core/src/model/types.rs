// Model descriptor and catalog types for the sharded build-script generator

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ShardgenError, ShardgenResult};

/// One downloadable ASR model package.
///
/// The rendered build scripts derive the release download URL from `name`
/// (`.../releases/download/asr-models/{name}.tar.bz2`), so `name` must match
/// the published archive exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Unique model identifier, also the basename of the release archive
    pub name: String,

    /// Stable numeric tag consumed by the downstream native build code
    pub index: u32,

    /// Spoken-language coverage, e.g. `zh`, `en`, `zh_en`
    pub language_tag: String,

    /// Human-readable language label for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_language_tag: Option<String>,

    /// Short display label, e.g. `whisper`, `paraformer`, `zipformer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Shell block run against the extracted model directory to strip
    /// unneeded files before packaging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_commands: Option<String>,

    /// Auxiliary grammar file required at runtime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_fst_name: Option<String>,

    /// Whether the high-resolution variant of the model is used
    #[serde(default)]
    pub use_high_resolution: bool,
}

/// Ordered, immutable list of model descriptors for one invocation.
///
/// A catalog is defined once (built-in data or a TOML file) and only ever
/// sliced by the partitioner, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// The descriptors, in assignment order
    pub models: Vec<ModelDescriptor>,
}

impl Catalog {
    /// Create a catalog from an ordered list of descriptors
    #[must_use]
    pub const fn new(models: Vec<ModelDescriptor>) -> Self {
        Self { models }
    }

    /// Number of descriptors in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Validate structural invariants: non-empty names, unique names and
    /// unique indexes.
    ///
    /// Duplicate indexes would silently select the wrong model in the
    /// downstream native consumer, so they are rejected here.
    pub fn validate(&self) -> ShardgenResult<()> {
        let mut names = HashSet::new();
        let mut indexes = HashSet::new();

        for model in &self.models {
            if model.name.is_empty() {
                return Err(ShardgenError::configuration(
                    "catalog contains a model with an empty name",
                ));
            }
            if !names.insert(model.name.as_str()) {
                return Err(ShardgenError::configuration(format!(
                    "duplicate model name '{}' in catalog",
                    model.name
                )));
            }
            if !indexes.insert(model.index) {
                return Err(ShardgenError::configuration(format!(
                    "duplicate model index {} in catalog ('{}')",
                    model.index, model.name
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate a catalog from TOML text (`[[models]]` array)
    pub fn from_toml_str(text: &str) -> ShardgenResult<Self> {
        let catalog: Self = toml::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ShardgenResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ShardgenError::file(format!("failed to read catalog {}: {e}", path.display()))
        })?;
        tracing::info!("loaded catalog from {}", path.display());
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, index: u32) -> ModelDescriptor {
        ModelDescriptor {
            name: name.to_string(),
            index,
            language_tag: "en".to_string(),
            secondary_language_tag: None,
            short_name: None,
            prep_commands: None,
            rule_fst_name: None,
            use_high_resolution: false,
        }
    }

    #[test]
    fn test_validate_accepts_unique_models() {
        let catalog = Catalog::new(vec![descriptor("a", 0), descriptor("b", 1)]);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_name() {
        let catalog = Catalog::new(vec![descriptor("a", 0), descriptor("a", 1)]);
        let err = catalog.validate().unwrap_err();
        assert_eq!(err.category(), "configuration");
        assert!(err.to_string().contains("duplicate model name 'a'"));
    }

    #[test]
    fn test_validate_rejects_duplicate_index() {
        let catalog = Catalog::new(vec![descriptor("a", 7), descriptor("b", 7)]);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate model index 7"));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let catalog = Catalog::new(vec![descriptor("", 0)]);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[models]]
            name = "sherpa-onnx-test-model"
            index = 3
            language_tag = "zh_en"
            short_name = "test"
            use_high_resolution = true

            [[models]]
            name = "sherpa-onnx-other-model"
            index = 4
            language_tag = "en"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.models[0].name, "sherpa-onnx-test-model");
        assert_eq!(catalog.models[0].short_name.as_deref(), Some("test"));
        assert!(catalog.models[0].use_high_resolution);
        assert_eq!(catalog.models[1].index, 4);
        assert!(catalog.models[1].short_name.is_none());
        assert!(!catalog.models[1].use_high_resolution);
    }

    #[test]
    fn test_from_toml_str_rejects_duplicates() {
        let result = Catalog::from_toml_str(
            r#"
            [[models]]
            name = "same"
            index = 0
            language_tag = "en"

            [[models]]
            name = "same"
            index = 1
            language_tag = "en"
            "#,
        );
        assert!(matches!(
            result,
            Err(ShardgenError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_from_toml_file_missing() {
        let err = Catalog::from_toml_file("/nonexistent/catalog.toml").unwrap_err();
        assert_eq!(err.category(), "file");
    }
}
