//! Type registries answering "does this class exist?"
//!
//! The generator never inspects source code itself. It asks a
//! [`TypeRegistry`] whether a fully qualified name resolves, which keeps the
//! model check and the collision checks independent of how the host
//! application loads its classes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::names::{NAMESPACE_SEPARATOR, SOURCE_EXTENSION};

/// Resolves fully qualified type names
pub trait TypeRegistry {
    fn exists(&self, fully_qualified_name: &str) -> bool;
}

/// Registry backed by an explicit set of names
#[derive(Debug, Clone, Default)]
pub struct InMemoryTypeRegistry {
    names: HashSet<String>,
}

impl InMemoryTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fully qualified name
    pub fn register(&mut self, fully_qualified_name: impl Into<String>) {
        self.names.insert(normalize(&fully_qualified_name.into()));
    }

    /// Builder-style [`register`](Self::register)
    #[must_use]
    pub fn with(mut self, fully_qualified_name: impl Into<String>) -> Self {
        self.register(fully_qualified_name);
        self
    }
}

impl<S: Into<String>> FromIterator<S> for InMemoryTypeRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for name in iter {
            registry.register(name);
        }
        registry
    }
}

impl TypeRegistry for InMemoryTypeRegistry {
    fn exists(&self, fully_qualified_name: &str) -> bool {
        self.names.contains(&normalize(fully_qualified_name))
    }
}

/// Registry that maps namespaces onto a source tree
///
/// A name under `namespace` resolves when the file
/// `<root>/<remaining segments joined by '/'>.php` exists, the way a PSR-4
/// autoloader maps `App\Models\User` to `app/Models/User.php`. Names outside
/// `namespace` never resolve.
#[derive(Debug, Clone)]
pub struct SourceTreeRegistry {
    root: PathBuf,
    namespace: String,
}

impl SourceTreeRegistry {
    pub fn new(root: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            namespace: normalize(&namespace.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source file a fully qualified name maps to, if it is under this tree
    pub fn source_path(&self, fully_qualified_name: &str) -> Option<PathBuf> {
        let name = normalize(fully_qualified_name);
        let relative = if self.namespace.is_empty() {
            name.as_str()
        } else {
            name.strip_prefix(&self.namespace)?
                .strip_prefix(NAMESPACE_SEPARATOR)?
        };

        let mut segments: Vec<&str> = relative.split(NAMESPACE_SEPARATOR).collect();
        let class = segments.pop().filter(|s| !s.is_empty())?;
        if segments.iter().any(|s| s.is_empty() || *s == "." || *s == "..") {
            return None;
        }

        let mut path = self.root.clone();
        path.extend(segments);
        path.push(format!("{class}.{SOURCE_EXTENSION}"));
        Some(path)
    }
}

impl TypeRegistry for SourceTreeRegistry {
    fn exists(&self, fully_qualified_name: &str) -> bool {
        self.source_path(fully_qualified_name)
            .is_some_and(|path| path.is_file())
    }
}

/// Strip leading/trailing separators so `\App\User` and `App\User` match
fn normalize(name: &str) -> String {
    name.trim().trim_matches(NAMESPACE_SEPARATOR).to_string()
}
