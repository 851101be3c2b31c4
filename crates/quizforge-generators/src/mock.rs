//! Fixed generator for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use rand::RngCore;
use uuid::Uuid;

use quizforge_core::generator::{DifficultyDistribution, QuestionGenerator};
use quizforge_core::model::{Difficulty, QuizOption, QuizQuestion};

/// A deterministic question generator for testing the session engine and
/// CLI without real content synthesis.
///
/// Serves a scripted sequence of questions, cycling when a request exceeds
/// the script length; an empty script yields empty batches, which drives the
/// "quiz unavailable" path.
pub struct FixedGenerator {
    id: String,
    script: Vec<QuizQuestion>,
    /// Number of generate calls made.
    call_count: AtomicU32,
    /// Count and distribution of the last request received.
    last_request: Mutex<Option<(usize, DifficultyDistribution)>>,
}

impl FixedGenerator {
    /// Create a fixed generator serving the given scripted questions.
    pub fn new(id: impl Into<String>, script: Vec<QuizQuestion>) -> Self {
        Self {
            id: id.into(),
            script,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// A generator whose questions are all answered correctly with `answer`.
    pub fn with_known_answer(id: impl Into<String>, answer: char, supply: usize) -> Self {
        let script = (0..supply)
            .map(|i| QuizQuestion {
                id: Uuid::new_v4(),
                text: format!("scripted question {i}"),
                options: ['A', 'B', 'C', 'D']
                    .into_iter()
                    .map(|label| QuizOption {
                        id: label,
                        text: if label == answer {
                            "right".into()
                        } else {
                            "wrong".into()
                        },
                    })
                    .collect(),
                correct_option_id: answer,
                difficulty: Difficulty::Medium,
                explanation: None,
            })
            .collect();
        Self::new(id, script)
    }

    /// A generator with no questions at all.
    pub fn empty(id: impl Into<String>) -> Self {
        Self::new(id, Vec::new())
    }

    /// Number of generate calls made to this generator.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Count and distribution of the last generate call, if any.
    pub fn last_request(&self) -> Option<(usize, DifficultyDistribution)> {
        *self.last_request.lock().unwrap()
    }
}

impl QuestionGenerator for FixedGenerator {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        "Fixed"
    }

    fn generate(
        &self,
        count: usize,
        distribution: &DifficultyDistribution,
        rng: &mut dyn RngCore,
    ) -> Vec<QuizQuestion> {
        let _ = rng;
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some((count, *distribution));

        if self.script.is_empty() {
            return Vec::new();
        }

        // Cycle the script, reissuing fresh ids so every emitted question is
        // unique per generation call.
        self.script
            .iter()
            .cycle()
            .take(count)
            .map(|q| QuizQuestion {
                id: Uuid::new_v4(),
                ..q.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn serves_exactly_count_by_cycling() {
        let generator = FixedGenerator::with_known_answer("fixed", 'C', 3);
        let mut rng = SmallRng::seed_from_u64(0);
        let questions = generator.generate(10, &DifficultyDistribution::for_count(10), &mut rng);
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(|q| q.correct_option_id == 'C'));
    }

    #[test]
    fn empty_script_yields_empty_batch() {
        let generator = FixedGenerator::empty("fixed");
        let mut rng = SmallRng::seed_from_u64(0);
        let questions = generator.generate(20, &DifficultyDistribution::for_count(20), &mut rng);
        assert!(questions.is_empty());
    }

    #[test]
    fn records_calls_and_last_request() {
        let generator = FixedGenerator::with_known_answer("fixed", 'A', 1);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(generator.call_count(), 0);

        let dist = DifficultyDistribution {
            easy: 1,
            medium: 2,
            hard: 1,
        };
        generator.generate(4, &dist, &mut rng);
        generator.generate(2, &DifficultyDistribution::default(), &mut rng);

        assert_eq!(generator.call_count(), 2);
        let (count, last_dist) = generator.last_request().unwrap();
        assert_eq!(count, 2);
        assert_eq!(last_dist, DifficultyDistribution::default());
    }

    #[test]
    fn emitted_ids_are_fresh() {
        let generator = FixedGenerator::with_known_answer("fixed", 'A', 2);
        let mut rng = SmallRng::seed_from_u64(0);
        let questions = generator.generate(4, &DifficultyDistribution::default(), &mut rng);
        let mut ids: Vec<_> = questions.iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
