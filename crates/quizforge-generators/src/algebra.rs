//! Single-variable linear equation generator.

use rand::{Rng, RngCore};
use uuid::Uuid;

use quizforge_core::generator::{
    build_options, distinct_distractors, DifficultyDistribution, QuestionGenerator,
};
use quizforge_core::model::{Difficulty, QuizQuestion};

/// Generates "solve for x" questions of the form `ax + b = c`.
///
/// Distractors model the classic mistakes: forgetting to divide by the
/// coefficient, adding `b` instead of subtracting it, and off-by-one slips.
pub struct LinearEquationGenerator;

impl LinearEquationGenerator {
    fn question(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> QuizQuestion {
        let (coeff_range, x_range) = match difficulty {
            Difficulty::Easy => (2..=4, 1..=5),
            Difficulty::Medium => (2..=9, 2..=12),
            Difficulty::Hard => (3..=12, 5..=25),
        };
        let a: i64 = rng.gen_range(coeff_range);
        let x: i64 = rng.gen_range(x_range);
        let b: i64 = rng.gen_range(1..=20);
        let c = a * x + b;

        let correct = x.to_string();
        let distractors = distinct_distractors(&correct, rng, |rng| {
            match rng.gen_range(0..4) {
                // Forgot to divide by a.
                0 => (c - b).to_string(),
                // Added b instead of subtracting.
                1 => ((c + b) / a).to_string(),
                // Off by one.
                2 => (x + rng.gen_range(1..=2)).to_string(),
                _ => (x - rng.gen_range(1..=2)).to_string(),
            }
        });

        let (options, correct_option_id) = build_options(correct, distractors, rng);

        QuizQuestion {
            id: Uuid::new_v4(),
            text: format!("Solve for x: {a}x + {b} = {c}"),
            options,
            correct_option_id,
            difficulty,
            explanation: Some(format!("{a}x = {c} - {b} = {}, so x = {x}", c - b)),
        }
    }
}

impl QuestionGenerator for LinearEquationGenerator {
    fn id(&self) -> &str {
        "linear-equations"
    }

    fn name(&self) -> &str {
        "Linear Equations"
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
