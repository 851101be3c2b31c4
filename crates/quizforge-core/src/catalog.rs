//! TOML course catalog parser.
//!
//! Loads course/unit catalogs from TOML files and directories, resolves
//! units to their generator identifier and quiz regime, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A catalog of courses and their quiz-bearing units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// One course in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for this course.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The units in this course.
    #[serde(default)]
    pub units: Vec<Unit>,
}

/// One unit within a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier within the course.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Topic generator serving this unit's quiz; absent means no quiz.
    #[serde(default)]
    pub generator: Option<String>,
    /// Whether the unit is a grand (cumulative) quiz.
    #[serde(default)]
    pub grand_quiz: bool,
}

impl Catalog {
    /// Resolve a course/unit pair.
    pub fn find_unit(&self, course_id: &str, unit_id: &str) -> Result<&Unit, CatalogError> {
        let course = self
            .courses
            .iter()
            .find(|c| c.id == course_id)
            .ok_or_else(|| CatalogError::CourseNotFound(course_id.to_string()))?;
        course
            .units
            .iter()
            .find(|u| u.id == unit_id)
            .ok_or_else(|| CatalogError::UnitNotFound {
                course: course_id.to_string(),
                unit: unit_id.to_string(),
            })
    }

    /// Merge another catalog's courses into this one.
    pub fn extend(&mut self, other: Catalog) {
        self.courses.extend(other.courses);
    }
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    toml::from_str(content)
        .with_context(|| format!("failed to parse catalog: {}", source_path.display()))
}

/// Recursively load all `.toml` catalog files from a directory into one
/// merged catalog. Unparsable files are skipped with a warning.
pub fn load_catalog_directory(dir: &Path) -> Result<Catalog> {
    let mut catalog = Catalog::default();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalog.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(parsed) => catalog.extend(parsed),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(catalog)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The unit ID (if applicable).
    pub unit_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues. `known_generators` is the set of
/// registered topic identifiers units may reference.
pub fn validate_catalog(catalog: &Catalog, known_generators: &[&str]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate course ids
    let mut seen_courses = std::collections::HashSet::new();
    for course in &catalog.courses {
        if !seen_courses.insert(&course.id) {
            warnings.push(ValidationWarning {
                unit_id: None,
                message: format!("duplicate course ID: {}", course.id),
            });
        }
    }

    for course in &catalog.courses {
        // Duplicate unit ids within a course
        let mut seen_units = std::collections::HashSet::new();
        for unit in &course.units {
            if !seen_units.insert(&unit.id) {
                warnings.push(ValidationWarning {
                    unit_id: Some(unit.id.clone()),
                    message: format!("duplicate unit ID in course {}: {}", course.id, unit.id),
                });
            }
        }

        for unit in &course.units {
            if unit.name.trim().is_empty() {
                warnings.push(ValidationWarning {
                    unit_id: Some(unit.id.clone()),
                    message: "unit name is empty".into(),
                });
            }

            match &unit.generator {
                Some(generator) if !known_generators.contains(&generator.as_str()) => {
                    warnings.push(ValidationWarning {
                        unit_id: Some(unit.id.clone()),
                        message: format!("unknown generator: {generator}"),
                    });
                }
                None => {
                    warnings.push(ValidationWarning {
                        unit_id: Some(unit.id.clone()),
                        message: "unit has no generator and will serve no quiz".into(),
                    });
                }
                _ => {}
            }
        }
    }

    warnings
}
