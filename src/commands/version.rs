//! Version command implementation

use console::Style;

use crate::config::CONFIG_FILE;
use crate::error::Result;
use crate::templates::{STUBS_DIR, TemplateKind};

/// Run version command
pub fn run() -> Result<()> {
    let label = Style::new().bold();
    println!("repogen {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", label.apply_to("Build info:"));
    println!("  Minimum Rust: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("{}", label.apply_to("Defaults:"));
    println!("  Config file: {CONFIG_FILE}");
    for kind in TemplateKind::ALL {
        println!("  Template: {STUBS_DIR}/{}", kind.file_name());
    }

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "release" }
}
