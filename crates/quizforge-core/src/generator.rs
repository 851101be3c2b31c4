//! The question generator contract and shared option-shuffling logic.
//!
//! Concrete topic generators live in the `quizforge-generators` crate; this
//! module defines the trait they implement and the helpers they share.

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, QuizOption, QuizQuestion};

// ---------------------------------------------------------------------------
// Question Generator trait
// ---------------------------------------------------------------------------

/// Trait for topic generators that synthesize multiple-choice questions.
///
/// Implementations must be stateless across calls beyond their own topic
/// configuration, and must return exactly `count` questions. All randomness
/// comes from the injected `rng` so callers can seed for determinism.
pub trait QuestionGenerator: Send + Sync {
    /// Topic identifier used for registry lookup (e.g. "addition").
    fn id(&self) -> &str;

    /// Human-readable topic name (e.g. "Addition").
    fn name(&self) -> &str;

    /// Generate exactly `count` questions following the distribution hint.
    fn generate(
        &self,
        count: usize,
        distribution: &DifficultyDistribution,
        rng: &mut dyn RngCore,
    ) -> Vec<QuizQuestion>;
}

/// Hint for how many questions of each difficulty a batch should contain.
///
/// If the counts sum to less than the requested batch size, the shortfall is
/// filled with medium-difficulty questions; any excess is truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyDistribution {
    #[serde(default)]
    pub easy: usize,
    #[serde(default)]
    pub medium: usize,
    #[serde(default)]
    pub hard: usize,
}

impl DifficultyDistribution {
    /// A 40/40/20 easy/medium/hard split for a batch of `count` questions.
    /// Rounding remainders land on medium via the shortfall rule.
    pub fn for_count(count: usize) -> Self {
        let easy = count * 2 / 5;
        let hard = count / 5;
        Self {
            easy,
            medium: count - easy - hard,
            hard,
        }
    }

    /// Expand the hint into a per-question difficulty sequence of exactly
    /// `count` entries.
    pub fn plan(&self, count: usize) -> Vec<Difficulty> {
        let mut plan = Vec::with_capacity(count);
        plan.extend(std::iter::repeat(Difficulty::Easy).take(self.easy));
        plan.extend(std::iter::repeat(Difficulty::Medium).take(self.medium));
        plan.extend(std::iter::repeat(Difficulty::Hard).take(self.hard));
        plan.truncate(count);
        while plan.len() < count {
            plan.push(Difficulty::Medium);
        }
        plan
    }
}

// ---------------------------------------------------------------------------
// Option shuffling
// ---------------------------------------------------------------------------

/// The sequential letter labels assigned to a question's options.
pub const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Permute one correct answer and three distractors, relabel with sequential
/// letters, and return the options plus the label that tracked the correct
/// answer through the permutation.
pub fn build_options(
    correct: String,
    distractors: [String; 3],
    rng: &mut dyn RngCore,
) -> (Vec<QuizOption>, char) {
    let [d1, d2, d3] = distractors;
    let mut texts = vec![(correct, true), (d1, false), (d2, false), (d3, false)];
    texts.shuffle(rng);

    let mut correct_id = OPTION_LABELS[0];
    let options = texts
        .into_iter()
        .zip(OPTION_LABELS)
        .map(|((text, is_correct), id)| {
            if is_correct {
                correct_id = id;
            }
            QuizOption { id, text }
        })
        .collect();

    (options, correct_id)
}

/// Draw three distractors from `candidate`, regenerating on collision with
/// the correct answer or an earlier distractor.
///
/// Retries are bounded at 16 per slot; if the budget runs out the collision
/// is accepted and logged, since exact non-collision is not structurally
/// guaranteed by every candidate space.
pub fn distinct_distractors(
    correct: &str,
    rng: &mut dyn RngCore,
    mut candidate: impl FnMut(&mut dyn RngCore) -> String,
) -> [String; 3] {
    const MAX_ATTEMPTS: usize = 16;

    let mut picked: Vec<String> = Vec::with_capacity(3);
    for slot in 0..3 {
        let mut text = candidate(rng);
        for _ in 0..MAX_ATTEMPTS {
            if text != correct && !picked.iter().any(|p| p == &text) {
                break;
            }
            text = candidate(rng);
        }
        if text == correct || picked.iter().any(|p| p == &text) {
            tracing::debug!(slot, "distractor collision not resolved within retry budget");
        }
        picked.push(text);
    }

    let mut iter = picked.into_iter();
    [
        iter.next().unwrap_or_default(),
        iter.next().unwrap_or_default(),
        iter.next().unwrap_or_default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn plan_exact_distribution() {
        let dist = DifficultyDistribution {
            easy: 2,
            medium: 1,
            hard: 1,
        };
        assert_eq!(
            dist.plan(4),
            vec![
                Difficulty::Easy,
                Difficulty::Easy,
                Difficulty::Medium,
                Difficulty::Hard
            ]
        );
    }

    #[test]
    fn plan_shortfall_fills_with_medium() {
        let dist = DifficultyDistribution {
            easy: 1,
            medium: 0,
            hard: 1,
        };
        let plan = dist.plan(5);
        assert_eq!(plan.len(), 5);
        assert_eq!(
            plan.iter().filter(|d| **d == Difficulty::Medium).count(),
            3
        );
    }

    #[test]
    fn plan_excess_truncates() {
        let dist = DifficultyDistribution {
            easy: 10,
            medium: 10,
            hard: 10,
        };
        assert_eq!(dist.plan(4).len(), 4);
    }

    #[test]
    fn for_count_sums_to_count() {
        for count in [4, 20, 100] {
            let dist = DifficultyDistribution::for_count(count);
            assert_eq!(dist.easy + dist.medium + dist.hard, count);
        }
    }

    #[test]
    fn build_options_labels_and_tracking() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let (options, correct_id) = build_options(
                "42".into(),
                ["41".into(), "43".into(), "24".into()],
                &mut rng,
            );
            assert_eq!(options.len(), 4);

            let labels: HashSet<char> = options.iter().map(|o| o.id).collect();
            assert_eq!(labels.len(), 4);
            assert!(labels.contains(&correct_id));

            let correct = options.iter().find(|o| o.id == correct_id).unwrap();
            assert_eq!(correct.text, "42");
        }
    }

    #[test]
    fn build_options_correct_not_positionally_biased() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen: HashSet<char> = HashSet::new();
        for _ in 0..200 {
            let (_, correct_id) = build_options(
                "x".into(),
                ["a".into(), "b".into(), "c".into()],
                &mut rng,
            );
            seen.insert(correct_id);
        }
        // Over 200 shuffles every label should have carried the answer.
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn distinct_distractors_avoid_correct() {
        let mut rng = SmallRng::seed_from_u64(3);
        let distractors = distinct_distractors("5", &mut rng, |rng| {
            use rand::Rng;
            rng.gen_range(0..10).to_string()
        });
        for d in &distractors {
            assert_ne!(d, "5");
        }
        let unique: HashSet<&String> = distractors.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn distinct_distractors_exhausted_candidate_space() {
        // Only one possible candidate: collisions are accepted after the
        // retry budget instead of looping forever.
        let mut rng = SmallRng::seed_from_u64(3);
        let distractors = distinct_distractors("5", &mut rng, |_| "7".to_string());
        assert_eq!(distractors, ["7".to_string(), "7".to_string(), "7".to_string()]);
    }
}
