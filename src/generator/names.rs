//! Name derivation for generated repositories
//!
//! Everything here is pure: a model name plus a [`GeneratorConfig`] always
//! yields the same [`NameBundle`].

use super::inflector::Pluralizer;
use crate::config::GeneratorConfig;
use crate::error::{self, Result};

/// Namespace separator of the generated sources
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Source file extension of the generated classes
pub const SOURCE_EXTENSION: &str = "php";

/// Suffix of repository class names
pub const REPOSITORY_SUFFIX: &str = "Repository";

/// Suffix of repository contract class names
pub const CONTRACT_SUFFIX: &str = "RepositoryContract";

/// Names derived from one model name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameBundle {
    /// Studly-cased model class name (`TestModel`)
    pub class_name: String,
    /// Repository class name (`TestModelsRepository`)
    pub repository_class_name: String,
    /// Repository contract class name (`TestModelsRepositoryContract`)
    pub contract_class_name: String,
    /// Fully qualified model name (`App\Models\TestModel`)
    pub model_fqn: String,
    /// Fully qualified repository name
    pub repository_fqn: String,
    /// Fully qualified contract name
    pub contract_fqn: String,
    /// Namespace generated repositories are declared in
    pub repository_base_namespace: String,
    /// Namespace generated contracts are declared in
    pub contract_base_namespace: String,
}

/// Studly-case a model name
///
/// The name is split on `_`, `-` and whitespace and the first letter of
/// each word is uppercased; the rest of every word is kept as written.
/// `test_model`, `test-model`, `test model` and `TestModel` all become
/// `TestModel`, and `APIKey` stays `APIKey`.
pub fn class_name_of(model_name: &str) -> String {
    model_name
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(upper_first)
        .collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join namespace segments, skipping empty ones
pub fn join_namespace<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let separator = NAMESPACE_SEPARATOR.to_string();
    segments
        .into_iter()
        .map(|s| s.trim_matches(|c| c == NAMESPACE_SEPARATOR || c == '/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Convert a directory path such as `Models/Admin` to a namespace segment
fn namespace_from_path(path: &str) -> String {
    path.replace('/', &NAMESPACE_SEPARATOR.to_string())
}

/// Derive all names for `model_name`
pub fn derive_names(
    model_name: &str,
    config: &GeneratorConfig,
    pluralizer: &dyn Pluralizer,
) -> Result<NameBundle> {
    let class_name = validated_class_name(model_name)?;

    let prefix = if config.pluralize {
        pluralizer.pluralize(&class_name)
    } else {
        class_name.clone()
    };
    let repository_class_name = format!("{prefix}{REPOSITORY_SUFFIX}");
    let contract_class_name = format!("{prefix}{CONTRACT_SUFFIX}");

    let app = config.base_application_namespace.as_str();
    let model_namespace = namespace_from_path(&config.model_base_path);
    let repository_base_namespace =
        join_namespace([app, config.repositories_base_namespace.as_str()]);
    let contract_base_namespace =
        join_namespace([app, config.repository_contract_base_namespace.as_str()]);

    Ok(NameBundle {
        model_fqn: join_namespace([app, model_namespace.as_str(), class_name.as_str()]),
        repository_fqn: join_namespace([
            repository_base_namespace.as_str(),
            repository_class_name.as_str(),
        ]),
        contract_fqn: join_namespace([
            contract_base_namespace.as_str(),
            contract_class_name.as_str(),
        ]),
        class_name,
        repository_class_name,
        contract_class_name,
        repository_base_namespace,
        contract_base_namespace,
    })
}

fn validated_class_name(model_name: &str) -> Result<String> {
    let trimmed = model_name.trim();
    if trimmed.is_empty() {
        return Err(error::invalid_model_name(model_name, "name is empty"));
    }

    if let Some(bad) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' ')))
    {
        return Err(error::invalid_model_name(
            model_name,
            format!("unexpected character '{bad}'"),
        ));
    }

    let class_name = class_name_of(trimmed);
    match class_name.chars().next() {
        None => Err(error::invalid_model_name(
            model_name,
            "name has no letters or digits",
        )),
        Some(first) if first.is_ascii_digit() => Err(error::invalid_model_name(
            model_name,
            "class names must not start with a digit",
        )),
        Some(_) => Ok(class_name),
    }
}
