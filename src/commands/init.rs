//! Init command implementation
//!
//! Publishes the default configuration into the workspace so it can be
//! edited, and optionally the built-in templates next to it.

use std::path::{Path, PathBuf};

use console::Style;

use super::helpers::resolve_workspace_path;
use crate::cli::InitArgs;
use crate::common::fs::write_new;
use crate::config::{CONFIG_FILE, GeneratorConfig};
use crate::error::Result;
use crate::templates::{STUBS_DIR, TemplateKind};

const CONFIG_HEADER: &str = "# repogen configuration\n\
                             #\n\
                             # Paths are relative to the source root passed to `repogen make --path`.\n\
                             # Namespaces are relative to base_application_namespace.\n\n";

/// Run init command
pub fn run(workspace: Option<PathBuf>, args: InitArgs) -> Result<()> {
    let workspace = resolve_workspace_path(workspace)?;
    let published = publish(&workspace, &args)?;

    let label = Style::new().green().bold();
    for path in &published {
        let shown = path.strip_prefix(&workspace).unwrap_or(path.as_path());
        println!("{} {}", label.apply_to("Published:"), shown.display());
    }

    Ok(())
}

/// Write the configuration (and templates) and return the written paths
fn publish(workspace: &Path, args: &InitArgs) -> Result<Vec<PathBuf>> {
    let mut published = Vec::new();

    let config_path = workspace.join(CONFIG_FILE);
    let yaml = format!("{CONFIG_HEADER}{}", GeneratorConfig::default().to_yaml()?);
    write_new(&config_path, &yaml, args.force)?;
    tracing::info!(path = %config_path.display(), "published configuration");
    published.push(config_path);

    if args.stubs {
        for kind in TemplateKind::ALL {
            let path = workspace.join(STUBS_DIR).join(kind.file_name());
            write_new(&path, kind.builtin(), args.force)?;
            tracing::info!(template = %kind, path = %path.display(), "published template");
            published.push(path);
        }
    }

    Ok(published)
}
