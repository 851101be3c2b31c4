//! Whole-number arithmetic generators (addition, subtraction,
//! multiplication, division).

use rand::{Rng, RngCore};
use uuid::Uuid;

use quizforge_core::generator::{
    build_options, distinct_distractors, DifficultyDistribution, QuestionGenerator,
};
use quizforge_core::model::{Difficulty, QuizQuestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    fn symbol(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '×',
            Operation::Division => '÷',
        }
    }
}

/// Generator for one whole-number arithmetic operation.
pub struct ArithmeticGenerator {
    op: Operation,
    id: &'static str,
    name: &'static str,
}

impl ArithmeticGenerator {
    pub fn addition() -> Self {
        Self {
            op: Operation::Addition,
            id: "addition",
            name: "Addition",
        }
    }

    pub fn subtraction() -> Self {
        Self {
            op: Operation::Subtraction,
            id: "subtraction",
            name: "Subtraction",
        }
    }

    pub fn multiplication() -> Self {
        Self {
            op: Operation::Multiplication,
            id: "multiplication",
            name: "Multiplication",
        }
    }

    pub fn division() -> Self {
        Self {
            op: Operation::Division,
            id: "division",
            name: "Division",
        }
    }

    /// Draw operands and the correct answer for one question.
    fn draw(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> (i64, i64, i64) {
        match self.op {
            Operation::Addition | Operation::Subtraction => {
                let range = match difficulty {
                    Difficulty::Easy => 1..=10,
                    Difficulty::Medium => 10..=50,
                    Difficulty::Hard => 25..=200,
                };
                let mut a = rng.gen_range(range.clone());
                let mut b = rng.gen_range(range);
                if self.op == Operation::Subtraction && b > a {
                    std::mem::swap(&mut a, &mut b);
                }
                let answer = if self.op == Operation::Addition {
                    a + b
                } else {
                    a - b
                };
                (a, b, answer)
            }
            Operation::Multiplication => {
                let range = match difficulty {
                    Difficulty::Easy => 2..=5,
                    Difficulty::Medium => 2..=12,
                    Difficulty::Hard => 11..=25,
                };
                let a = rng.gen_range(range.clone());
                let b = rng.gen_range(range);
                (a, b, a * b)
            }
            Operation::Division => {
                // Built backwards from divisor and quotient so the answer is
                // always whole.
                let range = match difficulty {
                    Difficulty::Easy => 2..=5,
                    Difficulty::Medium => 2..=12,
                    Difficulty::Hard => 11..=25,
                };
                let divisor = rng.gen_range(range.clone());
                let quotient = rng.gen_range(range);
                (divisor * quotient, divisor, quotient)
            }
        }
    }

    fn question(&self, difficulty: Difficulty, rng: &mut dyn RngCore) -> QuizQuestion {
        let (a, b, answer) = self.draw(difficulty, rng);
        let correct = answer.to_string();

        let spread = match difficulty {
            Difficulty::Easy => 3,
            Difficulty::Medium => 8,
            Difficulty::Hard => 15,
        };
        let distractors = distinct_distractors(&correct, rng, |rng| {
            let offset = rng.gen_range(-spread..=spread);
            (answer + offset).max(0).to_string()
        });

        let (options, correct_option_id) = build_options(correct, distractors, rng);
        let symbol = self.op.symbol();

        QuizQuestion {
            id: Uuid::new_v4(),
            text: format!("What is {a} {symbol} {b}?"),
            options,
            correct_option_id,
            difficulty,
            explanation: Some(format!("{a} {symbol} {b} = {answer}")),
        }
    }
}

impl QuestionGenerator for ArithmeticGenerator {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
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
