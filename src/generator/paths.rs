//! Output locations of generated files

use std::path::{Path, PathBuf};

use super::names::{NameBundle, SOURCE_EXTENSION};
use crate::common::fs::ensure_dir;
use crate::config::GeneratorConfig;
use crate::error::Result;

/// Path the repository file is written to, without touching the file system
pub fn repository_path(names: &NameBundle, base_path: &Path, config: &GeneratorConfig) -> PathBuf {
    target(
        base_path,
        &config.repositories_base_path,
        &names.repository_class_name,
    )
}

/// Path the repository contract file is written to, without touching the file system
pub fn contract_path(names: &NameBundle, base_path: &Path, config: &GeneratorConfig) -> PathBuf {
    target(
        base_path,
        &config.repository_contract_base_path,
        &names.contract_class_name,
    )
}

/// Path of the repository file, creating its directory if needed
pub fn resolve_repository_path(
    names: &NameBundle,
    base_path: &Path,
    config: &GeneratorConfig,
) -> Result<PathBuf> {
    prepared(repository_path(names, base_path, config))
}

/// Path of the repository contract file, creating its directory if needed
pub fn resolve_contract_path(
    names: &NameBundle,
    base_path: &Path,
    config: &GeneratorConfig,
) -> Result<PathBuf> {
    prepared(contract_path(names, base_path, config))
}

fn target(base_path: &Path, relative_dir: &str, class_name: &str) -> PathBuf {
    base_path
        .join(relative_dir)
        .join(format!("{class_name}.{SOURCE_EXTENSION}"))
}

fn prepared(path: PathBuf) -> Result<PathBuf> {
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }
    Ok(path)
}
