//! quizforge-generators — built-in topic question generators.
//!
//! Implements the `QuestionGenerator` contract for the arithmetic, algebra,
//! and fractions topics, plus a deterministic fixed generator for testing.

pub mod algebra;
pub mod arithmetic;
pub mod fractions;
pub mod mock;

use std::sync::Arc;

use quizforge_core::generator::QuestionGenerator;
use quizforge_core::registry::GeneratorRegistry;

pub use mock::FixedGenerator;

/// Build the registry of built-in generators.
///
/// This is the single startup routine that assembles the registry from a
/// fixed table, so registration order (and therefore last-wins conflict
/// resolution) is deterministic and independent of module load order.
pub fn builtin_registry() -> GeneratorRegistry {
    let generators: [Arc<dyn QuestionGenerator>; 6] = [
        Arc::new(arithmetic::ArithmeticGenerator::addition()),
        Arc::new(arithmetic::ArithmeticGenerator::subtraction()),
        Arc::new(arithmetic::ArithmeticGenerator::multiplication()),
        Arc::new(arithmetic::ArithmeticGenerator::division()),
        Arc::new(algebra::LinearEquationGenerator),
        Arc::new(fractions::FractionAdditionGenerator),
    ];
    GeneratorRegistry::with_generators(generators)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_topics() {
        let registry = builtin_registry();
        assert_eq!(
            registry.ids(),
            vec![
                "addition",
                "division",
                "fraction-addition",
                "linear-equations",
                "multiplication",
                "subtraction",
            ]
        );
    }
}
