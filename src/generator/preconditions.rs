//! Checks that must pass before anything is written

use super::names::NameBundle;
use super::registry::TypeRegistry;
use crate::error::{self, Result};

/// Fail with `ModelNotFound` unless the model resolves
pub fn ensure_model_exists(names: &NameBundle, registry: &dyn TypeRegistry) -> Result<()> {
    if !registry.exists(&names.model_fqn) {
        return Err(error::model_not_found(&names.model_fqn));
    }
    Ok(())
}

/// Fail with `AlreadyExists` if the repository or its contract resolves
///
/// The repository is checked first; a contract collision is only reported
/// when the repository name is free.
pub fn ensure_no_collision(names: &NameBundle, registry: &dyn TypeRegistry) -> Result<()> {
    for fqn in [&names.repository_fqn, &names.contract_fqn] {
        if registry.exists(fqn) {
            return Err(error::already_exists(fqn));
        }
    }
    Ok(())
}

/// Run every check in order, stopping at the first failure
pub fn check(names: &NameBundle, registry: &dyn TypeRegistry) -> Result<()> {
    ensure_model_exists(names, registry)?;
    ensure_no_collision(names, registry)
}
