use super::Version;
use super::diagnostics::{Diagnostics, TracingDiagnostics};
use super::interactions::InteractionModels;
use super::kind::VersionKind;
use crate::core::models::model::MolecularModel;
use crate::core::parameters::ParameterSet;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Run-level selection of the calculation version.
///
/// ```toml
/// version = "ligand-aware"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct VersionConfig {
    #[serde(default)]
    pub version: VersionKind,
}

impl VersionConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        debug!("Loaded version configuration from {:?}: {:?}", path, config);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

pub struct VersionBuilder<M: MolecularModel> {
    kind: Option<VersionKind>,
    parameters: Option<Arc<ParameterSet>>,
    models: Option<InteractionModels<M>>,
    diagnostics: Option<Arc<dyn Diagnostics>>,
}

impl<M: MolecularModel> Default for VersionBuilder<M> {
    fn default() -> Self {
        Self {
            kind: None,
            parameters: None,
            models: None,
            diagnostics: None,
        }
    }
}

impl<M: MolecularModel> VersionBuilder<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: VersionKind) -> Self {
        self.kind = Some(kind);
        self
    }
    pub fn config(mut self, config: &VersionConfig) -> Self {
        self.kind = Some(config.version);
        self
    }
    pub fn parameters(mut self, parameters: Arc<ParameterSet>) -> Self {
        self.parameters = Some(parameters);
        self
    }
    pub fn models(mut self, models: InteractionModels<M>) -> Self {
        self.models = Some(models);
        self
    }
    /// Routes informational messages somewhere other than `tracing`.
    pub fn diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn build(self) -> Result<Version<M>, ConfigError> {
        let kind = self.kind.ok_or(ConfigError::MissingParameter("version"))?;
        let parameters = self
            .parameters
            .ok_or(ConfigError::MissingParameter("parameters"))?;
        let models = self.models.ok_or(ConfigError::MissingParameter("models"))?;
        let diagnostics = self
            .diagnostics
            .unwrap_or_else(|| Arc::new(TracingDiagnostics));
        Ok(Version::new(kind, parameters, &models, diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::diagnostics::RecordingDiagnostics;
    use crate::version::test_support::{StubModel, sample_parameters, stub_models};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_toml_str_parses_version_names_and_aliases() {
        let config = VersionConfig::from_toml_str(r#"version = "ligand-aware""#).unwrap();
        assert_eq!(config.version, VersionKind::LigandAware);

        let config = VersionConfig::from_toml_str(r#"version = "propka30""#).unwrap();
        assert_eq!(config.version, VersionKind::Propka30);

        let legacy_name = r#"version = "element_based_ligand_interactions""#;
        let config = VersionConfig::from_toml_str(legacy_name).unwrap();
        assert_eq!(config.version, VersionKind::LigandAware);
    }

    #[test]
    fn from_toml_str_defaults_to_standard_when_version_is_absent() {
        let config = VersionConfig::from_toml_str("").unwrap();
        assert_eq!(config.version, VersionKind::Standard);
    }

    #[test]
    fn from_toml_str_rejects_unknown_version() {
        let result = VersionConfig::from_toml_str(r#"version = "propka31""#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Unknown calculation version"));
    }

    #[test]
    fn from_toml_str_rejects_unknown_fields() {
        let result = VersionConfig::from_toml_str("version = \"standard\"\ncutoff = 3.0");
        assert!(result.is_err());
    }

    #[test]
    fn load_succeeds_with_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("version.toml");
        fs::write(&file_path, r#"version = "simple-hb""#).unwrap();

        let config = VersionConfig::load(&file_path).unwrap();
        assert_eq!(config.version, VersionKind::SimpleHb);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("non_existent.toml");
        let result = VersionConfig::load(&file_path);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.toml");
        fs::write(&file_path, "this is not toml").unwrap();
        let result = VersionConfig::load(&file_path);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn builder_constructs_version_from_config() {
        let config = VersionConfig {
            version: VersionKind::Propka30,
        };
        let version = VersionBuilder::<StubModel>::new()
            .config(&config)
            .parameters(sample_parameters())
            .models(stub_models())
            .build()
            .unwrap();
        assert_eq!(version.kind(), VersionKind::Propka30);
    }

    #[test]
    fn builder_routes_diagnostics_to_injected_sink() {
        let diagnostics = Arc::new(RecordingDiagnostics::new());
        let version = VersionBuilder::<StubModel>::new()
            .kind(VersionKind::SimpleHb)
            .parameters(sample_parameters())
            .models(stub_models())
            .diagnostics(diagnostics.clone())
            .build()
            .unwrap();
        assert_eq!(version.kind(), VersionKind::SimpleHb);
        assert_eq!(diagnostics.messages(), vec!["Using simple hb model"]);
    }

    #[test]
    fn builder_fails_when_version_is_missing() {
        let result = VersionBuilder::<StubModel>::new()
            .parameters(sample_parameters())
            .models(stub_models())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("version"))
        ));
    }

    #[test]
    fn builder_fails_when_parameters_are_missing() {
        let result = VersionBuilder::<StubModel>::new()
            .kind(VersionKind::Standard)
            .models(stub_models())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("parameters"))
        ));
    }

    #[test]
    fn builder_fails_when_models_are_missing() {
        let result = VersionBuilder::<StubModel>::new()
            .kind(VersionKind::Standard)
            .parameters(sample_parameters())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("models"))
        ));
    }
}
