//! Repository generator
//!
//! [`RepositoryCreator`] turns a model name into two source files: a
//! repository class and the contract it implements. The steps always run in
//! the same order:
//!
//! 1. derive the [`NameBundle`](names::NameBundle) for the model
//! 2. check that the model exists and neither output class does
//! 3. render both templates
//! 4. check that neither output file is already on disk
//! 5. write the repository, then the contract
//!
//! Nothing is written unless steps 2 and 4 pass, and an existing file is
//! never replaced. There is no rollback between
//! the two writes: if the contract cannot be written, the repository file
//! already on disk stays there and the error names the contract path.

pub mod inflector;
pub mod names;
pub mod paths;
pub mod preconditions;
pub mod registry;
pub mod render;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::common::fs::write_atomic_new;
use crate::config::GeneratorConfig;
use crate::error::{self, Result};
use crate::templates::{TemplateKind, TemplateStore};
use inflector::{EnglishPluralizer, Pluralizer};
use registry::TypeRegistry;

/// Files written by one successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub repository_path: PathBuf,
    pub contract_path: PathBuf,
}

/// Scaffolds a repository and its contract for a model
pub struct RepositoryCreator<'a> {
    config: &'a GeneratorConfig,
    registry: &'a dyn TypeRegistry,
    templates: &'a dyn TemplateStore,
    pluralizer: &'a dyn Pluralizer,
}

impl<'a> RepositoryCreator<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        registry: &'a dyn TypeRegistry,
        templates: &'a dyn TemplateStore,
    ) -> Self {
        Self {
            config,
            registry,
            templates,
            pluralizer: &EnglishPluralizer,
        }
    }

    /// Use a different pluralization strategy
    #[must_use]
    pub fn with_pluralizer(mut self, pluralizer: &'a dyn Pluralizer) -> Self {
        self.pluralizer = pluralizer;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.config
    }

    /// Generate the repository and contract for `model_name` under `base_path`
    ///
    /// Returns the absolute paths of both written files.
    pub fn create(&self, model_name: &str, base_path: &Path) -> Result<GenerationResult> {
        self.config.validate()?;
        let base_path = std::path::absolute(base_path).map_err(|e| {
            error::io_error(format!(
                "Failed to resolve base path '{}': {e}",
                base_path.display()
            ))
        })?;

        let names = names::derive_names(model_name, self.config, self.pluralizer)?;
        tracing::debug!(
            model = %names.model_fqn,
            repository = %names.repository_fqn,
            contract = %names.contract_fqn,
            "derived names"
        );

        preconditions::check(&names, self.registry)?;

        let repository_stub = self.templates.get_template(TemplateKind::Repository)?;
        let contract_stub = self.templates.get_template(TemplateKind::Contract)?;
        let repository = render::render_repository(&repository_stub, &names);
        let contract = render::render_contract(&contract_stub, &names);

        ensure_destinations_free(&names, &base_path, self.config)?;

        let repository_path = paths::resolve_repository_path(&names, &base_path, self.config)?;
        write_atomic_new(&repository_path, &repository)?;
        tracing::info!(path = %repository_path.display(), "wrote repository");

        let contract_path = paths::resolve_contract_path(&names, &base_path, self.config)?;
        write_atomic_new(&contract_path, &contract)?;
        tracing::info!(path = %contract_path.display(), "wrote repository contract");

        Ok(GenerationResult {
            repository_path,
            contract_path,
        })
    }
}

/// Fail with `AlreadyExists` if either output file is already on disk
///
/// The type registry may map names to files differently than the configured
/// output directories do, so the destinations are checked as well.
fn ensure_destinations_free(
    names: &names::NameBundle,
    base_path: &Path,
    config: &GeneratorConfig,
) -> Result<()> {
    for (fqn, path) in [
        (
            &names.repository_fqn,
            paths::repository_path(names, base_path, config),
        ),
        (
            &names.contract_fqn,
            paths::contract_path(names, base_path, config),
        ),
    ] {
        if path.exists() {
            tracing::debug!(path = %path.display(), "destination already exists");
            return Err(error::already_exists(fqn));
        }
    }
    Ok(())
}
