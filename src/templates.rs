//! Template lookup for generated files
//!
//! The default templates ship inside the binary. A workspace can override
//! either of them by placing `repository.stub` or `contract.stub` in a stubs
//! directory; missing overrides fall back to the built-in template.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Built-in repository template
pub const REPOSITORY_STUB: &str = include_str!("../stubs/repository.stub");

/// Built-in repository contract template
pub const CONTRACT_STUB: &str = include_str!("../stubs/contract.stub");

/// Directory name conventionally holding template overrides
pub const STUBS_DIR: &str = "stubs";

/// The two templates the generator renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Repository,
    Contract,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Repository, TemplateKind::Contract];

    /// File name of the template in a stubs directory
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::Repository => "repository.stub",
            TemplateKind::Contract => "contract.stub",
        }
    }

    /// Built-in template text
    pub fn builtin(self) -> &'static str {
        match self {
            TemplateKind::Repository => REPOSITORY_STUB,
            TemplateKind::Contract => CONTRACT_STUB,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Repository => write!(f, "repository"),
            TemplateKind::Contract => write!(f, "contract"),
        }
    }
}

/// Source of template text by kind
pub trait TemplateStore {
    fn get_template(&self, kind: TemplateKind) -> Result<String>;
}

/// Templates compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateStore for EmbeddedTemplates {
    fn get_template(&self, kind: TemplateKind) -> Result<String> {
        Ok(kind.builtin().to_string())
    }
}

/// Templates read from a directory, falling back to the built-in ones
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Override path for `kind`
    pub fn path_for(&self, kind: TemplateKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

impl TemplateStore for DirectoryTemplates {
    fn get_template(&self, kind: TemplateKind) -> Result<String> {
        let path = self.path_for(kind);
        if !path.exists() {
            tracing::debug!(template = %kind, "no override, using built-in template");
            return Ok(kind.builtin().to_string());
        }

        tracing::debug!(template = %kind, path = %path.display(), "using template override");
        std::fs::read_to_string(&path)
            .map_err(|e| error::template_read_failed(path.display().to_string(), e.to_string()))
    }
}
