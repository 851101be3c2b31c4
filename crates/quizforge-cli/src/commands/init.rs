//! The `quizforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("courses.toml").exists() {
        println!("courses.toml already exists, skipping.");
    } else {
        std::fs::write("courses.toml", SAMPLE_CATALOG)?;
        println!("Created courses.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizforge validate --catalog courses.toml");
    println!("  2. Run: quizforge play --catalog courses.toml --course arithmetic-1 --unit addition");

    Ok(())
}

const SAMPLE_CATALOG: &str = r#"# quizforge course catalog

[[courses]]
id = "arithmetic-1"
name = "Arithmetic Basics"

[[courses.units]]
id = "addition"
name = "Addition"
generator = "addition"

[[courses.units]]
id = "subtraction"
name = "Subtraction"
generator = "subtraction"

[[courses.units]]
id = "multiplication"
name = "Multiplication"
generator = "multiplication"

[[courses.units]]
id = "division"
name = "Division"
generator = "division"

[[courses.units]]
id = "unit-review"
name = "Unit Review"
generator = "addition"
grand_quiz = true

[[courses]]
id = "pre-algebra"
name = "Pre-algebra"

[[courses.units]]
id = "fractions"
name = "Adding Fractions"
generator = "fraction-addition"

[[courses.units]]
id = "equations"
name = "Linear Equations"
generator = "linear-equations"
"#;
