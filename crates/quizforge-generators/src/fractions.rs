//! Fraction addition generator (common denominators).
//!
//! Option text uses inline TeX-style markup (`$\frac{n}{d}$`); the core and
//! the engine treat it as opaque text.

use rand::{Rng, RngCore};
use uuid::Uuid;

use quizforge_core::generator::{
    build_options, distinct_distractors, DifficultyDistribution, QuestionGenerator,
};
use quizforge_core::model::{Difficulty, QuizQuestion};

fn frac(numerator: i64, denominator: i64) -> String {
    format!("$\\frac{{{numerator}}}{{{denominator}}}$")
}

/// Generates `n1/d + n2/d` questions over a shared denominator.
pub struct FractionAdditionGenerator;

impl FractionAdditionGenerator {
    fn question(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> QuizQuestion {
        let d: i64 = match difficulty {
            Difficulty::Easy => rng.gen_range(3..=5),
            Difficulty::Medium => rng.gen_range(5..=9),
            Difficulty::Hard => rng.gen_range(8..=15),
        };
        // Keep the sum proper so the answer stays below one whole.
        let n1: i64 = rng.gen_range(1..=(d - 2).max(1));
        let n2: i64 = rng.gen_range(1..=(d - n1 - 1).max(1));
        let sum = n1 + n2;

        let correct = frac(sum, d);
        let distractors = distinct_distractors(&correct, rng, |rng| {
            match rng.gen_range(0..3) {
                // Added the denominators too.
                0 => frac(sum, d * 2),
                // Multiplied the numerators.
                1 => frac(n1 * n2, d),
                _ => frac(sum + rng.gen_range(1..=2), d),
            }
        });

        let (options, correct_option_id) = build_options(correct, distractors, rng);

        QuizQuestion {
            id: Uuid::new_v4(),
            text: format!(
                "What is {} + {}?",
                frac(n1, d),
                frac(n2, d)
            ),
            options,
            correct_option_id,
            difficulty,
            explanation: Some(format!(
                "With a common denominator, add the numerators: {n1} + {n2} = {sum}."
            )),
        }
    }
}

impl QuestionGenerator for FractionAdditionGenerator {
    fn id(&self) -> &str {
        "fraction-addition"
    }

    fn name(&self) -> &str {
        "Fraction Addition"
    }

    fn generate(
        &self,
        count: usize,
        distribution: &DifficultyDistribution,
        rng: &mut dyn RngCore,
    ) -> Vec<QuizQuestion> {
        distribution
            .plan(count)
            .into_iter()
            .map(|difficulty| self.question(difficulty, rng))
            .collect()
    }
}
