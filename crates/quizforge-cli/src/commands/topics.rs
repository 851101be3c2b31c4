//! The `quizforge topics` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizforge_core::catalog;
use quizforge_generators::builtin_registry;

pub fn execute(catalog_path: Option<PathBuf>) -> Result<()> {
    let registry = builtin_registry();

    let mut table = Table::new();
    table.set_header(vec!["Topic ID", "Name"]);
    for id in registry.ids() {
        let generator = registry.lookup(id).expect("id came from the registry");
        table.add_row(vec![Cell::new(id), Cell::new(generator.name())]);
    }
    println!("Registered topics:\n{table}");

    if let Some(path) = catalog_path {
        let catalog = if path.is_dir() {
            catalog::load_catalog_directory(&path)?
        } else {
            catalog::parse_catalog(&path)?
        };

        let mut units = Table::new();
        units.set_header(vec!["Course", "Unit", "Topic", "Regime"]);
        for course in &catalog.courses {
            for unit in &course.units {
                units.add_row(vec![
                    Cell::new(&course.id),
                    Cell::new(&unit.id),
                    Cell::new(unit.generator.as_deref().unwrap_or("(no quiz)")),
                    Cell::new(if unit.grand_quiz { "grand" } else { "regular" }),
                ]);
            }
        }
        println!("\nCatalog units:\n{units}");
    }

    Ok(())
}
