//! Generator configuration (repositories.yaml) data structures
//!
//! Mirrors the settings a host application publishes for the repository
//! scaffolder: where models live, and where repositories and their
//! contracts are written and namespaced.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Generator configuration (repositories.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root namespace of the host application (e.g. `App`)
    #[serde(alias = "baseApplicationNamespace")]
    pub base_application_namespace: String,

    /// Directory (and namespace segment) the models live under
    #[serde(alias = "modelBasePath")]
    pub model_base_path: String,

    /// Directory repositories are written to, relative to the base path
    #[serde(alias = "repositoriesBasePath")]
    pub repositories_base_path: String,

    /// Namespace of generated repositories, relative to the application namespace
    #[serde(alias = "repositoriesBaseNamespace")]
    pub repositories_base_namespace: String,

    /// Directory repository contracts are written to, relative to the base path
    #[serde(alias = "repositoryContractBasePath")]
    pub repository_contract_base_path: String,

    /// Namespace of generated contracts, relative to the application namespace
    #[serde(alias = "repositoryContractBaseNamespace")]
    pub repository_contract_base_namespace: String,

    /// Pluralize the model name in repository class names (`UsersRepository`)
    #[serde(alias = "pluralise")]
    pub pluralize: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_application_namespace: "App".to_string(),
            model_base_path: "Models".to_string(),
            repositories_base_path: "Repositories".to_string(),
            repositories_base_namespace: "Repositories".to_string(),
            repository_contract_base_path: "Repositories/Contracts".to_string(),
            repository_contract_base_namespace: "Repositories\\Contracts".to_string(),
            pluralize: true,
        }
    }
}

impl GeneratorConfig {
    /// Parse generator configuration from YAML string
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize generator configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Validate the generator configuration
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("model_base_path", &self.model_base_path),
            ("repositories_base_path", &self.repositories_base_path),
            (
                "repository_contract_base_path",
                &self.repository_contract_base_path,
            ),
        ] {
            validate_relative_path(key, value)?;
        }

        for (key, value) in [
            ("base_application_namespace", &self.base_application_namespace),
            ("repositories_base_namespace", &self.repositories_base_namespace),
            (
                "repository_contract_base_namespace",
                &self.repository_contract_base_namespace,
            ),
        ] {
            if value.contains('/') {
                return Err(error::config_invalid_key(
                    key,
                    format_args!("must use '\\' as namespace separator, got '{value}'"),
                ));
            }
        }

        Ok(())
    }
}

fn validate_relative_path(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(error::config_invalid_key(key, "must not be empty"));
    }

    let path = Path::new(value);
    if path.is_absolute() || path.has_root() {
        return Err(error::config_invalid_key(
            key,
            format_args!("must be relative to the base path, got '{value}'"),
        ));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(error::config_invalid_key(
            key,
            format_args!("must not contain '..', got '{value}'"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepogenError;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.base_application_namespace, "App");
        assert_eq!(config.model_base_path, "Models");
        assert_eq!(config.repositories_base_path, "Repositories");
        assert_eq!(config.repository_contract_base_path, "Repositories/Contracts");
        assert_eq!(
            config.repository_contract_base_namespace,
            "Repositories\\Contracts"
        );
        assert!(config.pluralize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = GeneratorConfig::from_yaml("base_application_namespace: Acme\n").unwrap();
        assert_eq!(config.base_application_namespace, "Acme");
        assert_eq!(config.repositories_base_path, "Repositories");
        assert!(config.pluralize);
    }

    #[test]
    fn test_from_yaml_empty_document() {
        let config = GeneratorConfig::from_yaml("  \n").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_from_yaml_camel_case_keys() {
        let yaml = r"
baseApplicationNamespace: Shop
repositoriesBasePath: Data/Repos
repositoryContractBaseNamespace: Data\Contracts
pluralize: false
";
        let config = GeneratorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.base_application_namespace, "Shop");
        assert_eq!(config.repositories_base_path, "Data/Repos");
        assert_eq!(config.repository_contract_base_namespace, "Data\\Contracts");
        assert!(!config.pluralize);
    }

    #[test]
    fn test_from_yaml_pluralise_alias() {
        let config = GeneratorConfig::from_yaml("pluralise: false\n").unwrap();
        assert!(!config.pluralize);
    }

    #[test]
    fn test_from_yaml_invalid() {
        let result = GeneratorConfig::from_yaml("pluralize: [not, a, bool]");
        assert!(matches!(
            result.unwrap_err(),
            RepogenError::ConfigParseFailed { .. }
        ));
    }

    #[test]
    fn test_yaml_round_trip_keeps_backslashes() {
        let config = GeneratorConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("repository_contract_base_path: Repositories/Contracts"));
        assert_eq!(GeneratorConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = GeneratorConfig {
            repositories_base_path: "  ".to_string(),
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("repositories_base_path"));
    }

    #[test]
    fn test_validate_rejects_absolute_path() {
        let config = GeneratorConfig {
            repository_contract_base_path: "/etc/contracts".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            RepogenError::ConfigInvalid { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_parent_dir() {
        let config = GeneratorConfig {
            repositories_base_path: "../outside".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_slash_in_namespace() {
        let config = GeneratorConfig {
            repositories_base_namespace: "Repositories/Eloquent".to_string(),
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("namespace separator"));
    }

    #[test]
    fn test_empty_application_namespace_is_allowed() {
        let config = GeneratorConfig {
            base_application_namespace: String::new(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
