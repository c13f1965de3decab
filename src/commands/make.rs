//! Make command implementation
//!
//! Wires the CLI to [`RepositoryCreator`]: configuration comes from the
//! workspace, model lookup and collision checks go through the source tree
//! under `--path`, and templates come from the stubs directory when present.

use std::path::{Path, PathBuf};

use console::Style;
use serde::Serialize;

use super::helpers::{resolve_in_workspace, resolve_workspace_path};
use crate::cli::{MakeArgs, OutputFormat};
use crate::config;
use crate::error::{self, Result};
use crate::generator::registry::SourceTreeRegistry;
use crate::generator::{GenerationResult, RepositoryCreator};
use crate::templates::{DirectoryTemplates, STUBS_DIR};

/// One generated file, as reported to the user
#[derive(Debug, Serialize)]
struct GeneratedFile {
    class: String,
    path: PathBuf,
}

/// JSON report of a make run
#[derive(Debug, Serialize)]
struct MakeReport {
    repository: GeneratedFile,
    contract: GeneratedFile,
}

impl From<GenerationResult> for MakeReport {
    fn from(result: GenerationResult) -> Self {
        Self {
            repository: GeneratedFile {
                class: class_of(&result.repository_path),
                path: result.repository_path,
            },
            contract: GeneratedFile {
                class: class_of(&result.contract_path),
                path: result.contract_path,
            },
        }
    }
}

/// Class name a generated file declares
fn class_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Run make command
pub fn run(
    workspace: Option<PathBuf>,
    config_path: Option<PathBuf>,
    args: MakeArgs,
) -> Result<()> {
    let workspace = resolve_workspace_path(workspace)?;
    let mut config = config::load(&workspace, config_path.as_deref())?;
    if args.no_pluralize {
        config.pluralize = false;
    }

    let base_path = resolve_in_workspace(&workspace, &args.path);
    let registry = SourceTreeRegistry::new(&base_path, config.base_application_namespace.clone());
    let templates = DirectoryTemplates::new(stubs_dir(&workspace, args.stubs.as_deref())?);
    tracing::debug!(
        base_path = %base_path.display(),
        stubs = %templates.dir().display(),
        "generating repository"
    );

    let creator = RepositoryCreator::new(&config, &registry, &templates);
    let result = creator.create(args.model.trim(), &base_path)?;
    let report = MakeReport::from(result);

    match args.format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Template directory: an explicit one must exist, the default may not
fn stubs_dir(workspace: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => {
            let dir = resolve_in_workspace(workspace, dir);
            if !dir.is_dir() {
                return Err(error::template_read_failed(
                    dir.display().to_string(),
                    "template directory not found",
                ));
            }
            Ok(dir)
        }
        None => Ok(workspace.join(STUBS_DIR)),
    }
}

fn print_report(report: &MakeReport) {
    let label = Style::new().green().bold();
    println!(
        "{} {}",
        label.apply_to("Created Repository:"),
        report.repository.class
    );
    println!(
        "{} {}",
        label.apply_to("Created Repository Contract:"),
        report.contract.class
    );
}
