//! The `quizforge validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::catalog;
use quizforge_generators::builtin_registry;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = if catalog_path.is_dir() {
        catalog::load_catalog_directory(&catalog_path)?
    } else {
        catalog::parse_catalog(&catalog_path)?
    };

    let unit_count: usize = catalog.courses.iter().map(|c| c.units.len()).sum();
    println!(
        "Catalog: {} course(s), {} unit(s)",
        catalog.courses.len(),
        unit_count
    );

    let registry = builtin_registry();
    let warnings = catalog::validate_catalog(&catalog, &registry.ids());

    for w in &warnings {
        let prefix = w
            .unit_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
