//! Core data model types for quizforge.
//!
//! These are the fundamental types the entire quizforge system uses to
//! represent questions, answers, sessions, and results. Question and option
//! text may embed inline math markup; the core treats it as opaque text and
//! never renders it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Difficulty of a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// One answer choice within a question.
///
/// The `id` letter is assigned after shuffling, so the position of the
/// correct option carries no information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    /// Single-letter label (A–D).
    pub id: char,
    /// Answer text, possibly containing math markup.
    pub text: String,
}

/// A single multiple-choice question. Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Unique per generation call.
    pub id: Uuid,
    /// The prompt shown to the student.
    pub text: String,
    /// Exactly four options with distinct letter labels.
    pub options: Vec<QuizOption>,
    /// Label of the correct option; always one of `options`.
    pub correct_option_id: char,
    pub difficulty: Difficulty,
    /// Optional worked explanation shown after answering.
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    /// The full text of the correct option, if the question is well formed.
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == self.correct_option_id)
    }
}

/// A recorded answer to one question. Append-only within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: Uuid,
    pub selected_option_id: char,
    /// Graded at submission time.
    pub correct: bool,
}

/// One student attempt at a unit quiz.
///
/// There is no explicit state field: the session's state is derived from
/// `current_index`, `questions.len()`, and `bonus_triggered`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub course_id: String,
    pub unit_id: String,
    /// Grand (cumulative) quizzes use the larger question count.
    pub is_grand_quiz: bool,
    /// Grows by one if a bonus question is appended.
    pub questions: Vec<QuizQuestion>,
    /// Cursor into `questions`; always equals `answers.len()`.
    pub current_index: usize,
    pub answers: Vec<Answer>,
    /// Flips false→true at most once per session.
    pub bonus_triggered: bool,
    /// 0–3, populated at completion.
    pub stars: u8,
}

impl QuizSession {
    /// Number of non-bonus questions in this attempt.
    pub fn regular_count(&self) -> usize {
        if self.is_grand_quiz {
            crate::engine::GRAND_QUIZ_COUNT
        } else {
            crate::engine::REGULAR_QUIZ_COUNT
        }
    }

    /// The question currently awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }
}

/// The outcome of a completed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct_answers: usize,
    /// 0–3 per the star policy.
    pub stars: u8,
    /// Whether the bonus recovery rule fired during the attempt.
    pub bonus_used: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_display_and_parse() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("normal".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn question_serde_roundtrip() {
        let question = QuizQuestion {
            id: Uuid::new_v4(),
            text: "What is $2 + 2$?".into(),
            options: vec![
                QuizOption { id: 'A', text: "3".into() },
                QuizOption { id: 'B', text: "4".into() },
                QuizOption { id: 'C', text: "5".into() },
                QuizOption { id: 'D', text: "22".into() },
            ],
            correct_option_id: 'B',
            difficulty: Difficulty::Easy,
            explanation: Some("2 + 2 = 4".into()),
        };
        let json = serde_json::to_string(&question).unwrap();
        let deserialized: QuizQuestion = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.correct_option_id, 'B');
        assert_eq!(deserialized.options.len(), 4);
        assert_eq!(deserialized.correct_option().unwrap().text, "4");
    }

    #[test]
    fn correct_option_missing_label() {
        let question = QuizQuestion {
            id: Uuid::new_v4(),
            text: "broken".into(),
            options: vec![QuizOption { id: 'A', text: "only".into() }],
            correct_option_id: 'Z',
            difficulty: Difficulty::Medium,
            explanation: None,
        };
        assert!(question.correct_option().is_none());
    }

    #[test]
    fn regular_count_by_regime() {
        let mut session = QuizSession {
            course_id: "arithmetic".into(),
            unit_id: "addition".into(),
            is_grand_quiz: false,
            questions: vec![],
            current_index: 0,
            answers: vec![],
            bonus_triggered: false,
            stars: 0,
        };
        assert_eq!(session.regular_count(), 4);
        session.is_grand_quiz = true;
        assert_eq!(session.regular_count(), 20);
    }
}
