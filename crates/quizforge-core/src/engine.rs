//! The quiz session engine — pool drawing, answer grading, the bonus rule,
//! and star scoring.
//!
//! One `QuizEngine` owns exactly one in-flight attempt: the candidate pool
//! and its cursor are encapsulated alongside the session they serve, so two
//! attempts can never interleave cursor advances. Callers wanting a second
//! concurrent quiz create a second engine.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::generator::DifficultyDistribution;
use crate::model::{Answer, QuizQuestion, QuizResult, QuizSession};
use crate::registry::GeneratorRegistry;

/// Questions per regular attempt.
pub const REGULAR_QUIZ_COUNT: usize = 4;
/// Questions per grand (cumulative) attempt.
pub const GRAND_QUIZ_COUNT: usize = 20;
/// The pool is oversized by this factor to cover bonus questions and retries.
pub const POOL_FACTOR: usize = 5;

/// Derived session state as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// More regular questions to serve.
    Continue,
    /// Exactly one regular question was missed; offer the bonus question.
    BonusNeeded,
    /// The attempt is finished and a result can be computed.
    Complete,
}

/// The candidate question pool for one attempt, with a consumption cursor.
///
/// The cursor only moves forward, except for an explicit wrap to the start
/// when a retry batch no longer fits.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Pool {
    questions: Vec<QuizQuestion>,
    cursor: usize,
}

impl Pool {
    fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            cursor: 0,
        }
    }

    /// Take the next `n` unconsumed questions. If fewer than `n` remain the
    /// cursor wraps to the start and the first entries are reused — repeats
    /// are an accepted fallback, not a reshuffle.
    fn next_batch(&mut self, n: usize) -> Vec<QuizQuestion> {
        if self.cursor + n > self.questions.len() {
            tracing::debug!(
                cursor = self.cursor,
                pool = self.questions.len(),
                "pool exhausted for a batch of {n}, wrapping to the start"
            );
            self.cursor = 0;
        }
        let end = (self.cursor + n).min(self.questions.len());
        let batch = self.questions[self.cursor..end].to_vec();
        self.cursor = end;
        batch
    }

    /// Take the single next unconsumed question, if any remain.
    fn next_question(&mut self) -> Option<QuizQuestion> {
        let question = self.questions.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(question)
    }
}

/// The quiz session engine: one engine per in-flight attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizEngine {
    pool: Pool,
    session: QuizSession,
}

impl QuizEngine {
    /// Start a session for a unit: draw a pool of `regular_count × 5`
    /// candidates from the registry and serve the initial batch.
    ///
    /// Returns `None` when the pool comes back empty (unknown generator id
    /// is the sole cause); the caller should present a "quiz unavailable"
    /// state and not retain the engine.
    pub fn create_session(
        registry: &GeneratorRegistry,
        course_id: &str,
        unit_id: &str,
        generator_id: &str,
        is_grand_quiz: bool,
        rng: &mut dyn RngCore,
    ) -> Option<Self> {
        let regular_count = if is_grand_quiz {
            GRAND_QUIZ_COUNT
        } else {
            REGULAR_QUIZ_COUNT
        };
        let pool_size = regular_count * POOL_FACTOR;
        let distribution = DifficultyDistribution::for_count(pool_size);
        let candidates = registry.generate_questions(generator_id, pool_size, &distribution, rng);

        if candidates.is_empty() {
            tracing::warn!("empty question pool for '{generator_id}', quiz unavailable");
            return None;
        }

        let mut pool = Pool::new(candidates);
        let questions = pool.next_batch(regular_count);

        Some(Self {
            pool,
            session: QuizSession {
                course_id: course_id.to_string(),
                unit_id: unit_id.to_string(),
                is_grand_quiz,
                questions,
                current_index: 0,
                answers: Vec::new(),
                bonus_triggered: false,
                stars: 0,
            },
        })
    }

    /// The attempt this engine is serving.
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Total candidates drawn for this attempt.
    pub fn pool_len(&self) -> usize {
        self.pool.questions.len()
    }

    /// How much of the pool has been consumed.
    pub fn pool_cursor(&self) -> usize {
        self.pool.cursor
    }

    /// Grade `selected_option_id` against the question at the cursor, record
    /// the answer, and advance. A no-op once every served question has been
    /// answered.
    pub fn submit_answer(&mut self, selected_option_id: char) {
        let Some(question) = self.session.questions.get(self.session.current_index) else {
            return;
        };
        self.session.answers.push(Answer {
            question_id: question.id,
            selected_option_id,
            correct: selected_option_id == question.correct_option_id,
        });
        self.session.current_index += 1;
    }

    /// Derive the attempt's state from the cursor, the question count, and
    /// the bonus flag.
    pub fn check_state(&self) -> SessionState {
        let regular_count = self.session.regular_count();

        if self.session.current_index < regular_count {
            return SessionState::Continue;
        }

        if self.session.current_index == regular_count && !self.session.bonus_triggered {
            let wrong = self
                .session
                .answers
                .iter()
                .take(regular_count)
                .filter(|a| !a.correct)
                .count();
            return match wrong {
                1 => SessionState::BonusNeeded,
                _ => SessionState::Complete,
            };
        }

        SessionState::Complete
    }

    /// Append the next unconsumed pool entry as the bonus question.
    ///
    /// On an exhausted pool the bonus flag is still set and no question is
    /// appended; `calculate_result` then scores the missing bonus answer as
    /// incorrect.
    pub fn add_bonus_question(&mut self) {
        if self.session.bonus_triggered {
            return;
        }
        match self.pool.next_question() {
            Some(question) => self.session.questions.push(question),
            None => {
                tracing::warn!(
                    unit = %self.session.unit_id,
                    "pool exhausted, bonus question could not be appended"
                );
            }
        }
        self.session.bonus_triggered = true;
    }

    /// Start a fresh attempt from the next unconsumed pool entries, wrapping
    /// to the start of the pool when too few remain.
    pub fn retry(&mut self) {
        let regular_count = self.session.regular_count();
        self.session.questions = self.pool.next_batch(regular_count);
        self.session.current_index = 0;
        self.session.answers.clear();
        self.session.bonus_triggered = false;
        self.session.stars = 0;
    }

    /// Compute the attempt's result and star rating.
    ///
    /// Star policy: all regular questions correct → 3; a correct bonus
    /// answer → 2, a missed (or missing) bonus answer → 1; otherwise at
    /// least half the regular questions correct → 1, else 0.
    pub fn calculate_result(&mut self) -> QuizResult {
        let regular_count = self.session.regular_count();
        let correct_answers = self.session.answers.iter().filter(|a| a.correct).count();
        let regular_correct = self
            .session
            .answers
            .iter()
            .take(regular_count)
            .filter(|a| a.correct)
            .count();

        let stars = if regular_correct == regular_count {
            3
        } else if self.session.bonus_triggered {
            match self.session.answers.get(regular_count) {
                Some(bonus) if bonus.correct => 2,
                _ => 1,
            }
        } else {
            let ratio = regular_correct as f64 / regular_count as f64;
            if ratio >= 0.5 {
                1
            } else {
                0
            }
        };

        self.session.stars = stars;

        QuizResult {
            total_questions: self.session.answers.len(),
            correct_answers,
            stars,
            bonus_used: self.session.bonus_triggered,
        }
    }
}
