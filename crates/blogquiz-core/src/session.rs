//! Quiz session state machine.
//!
//! A session moves Active → Complete as answers are recorded, one per
//! question, first answer final. "Idle" is simply the absence of a session:
//! [`generate_quiz`] returns `None` when there is nothing to quiz about, and
//! a new search replaces the old session wholesale.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Post;
use crate::quiz::{questions_for, Question};

/// Per-search quiz state: the generated questions plus one answer slot each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: Uuid,
    /// The search query the quiz was generated from.
    pub topic: String,
    /// Fixed once generated; never reordered or regenerated in place.
    pub questions: Vec<Question>,
    /// `None` = unanswered; `Some(i)` = selected option index.
    answers: Vec<Option<usize>>,
}

/// What a recorded answer revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The single correct option for the question, so an incorrect pick can
    /// be shown next to the right one.
    pub correct_option: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Active,
    Complete,
}

/// Fixed result bands. Boundaries (100, 80, 60) are part of the contract;
/// the message copy attached to each band is presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Perfect,
    High,
    Mid,
    Low,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage == 100 {
            ScoreBand::Perfect
        } else if percentage >= 80 {
            ScoreBand::High
        } else if percentage >= 60 {
            ScoreBand::Mid
        } else {
            ScoreBand::Low
        }
    }
}

/// Final score, available once every question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub band: ScoreBand,
}

/// A read of the session's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub state: SessionState,
    pub answered: usize,
    pub total: usize,
    /// `Some` exactly when `state == Complete`.
    pub score: Option<FinalScore>,
}

/// Idle → Active: build a session from ranked results, or `None` when the
/// search produced nothing to quiz about.
pub fn generate_quiz(results: &[Post], topic: &str) -> Option<QuizSession> {
    if results.is_empty() {
        return None;
    }
    let questions = questions_for(results, topic);
    let answers = vec![None; questions.len()];
    tracing::debug!(topic, questions = questions.len(), "quiz generated");
    Some(QuizSession {
        id: Uuid::new_v4(),
        topic: topic.to_string(),
        questions,
        answers,
    })
}

impl QuizSession {
    /// Record the answer for a question and reveal the outcome.
    ///
    /// The first answer is final: recording against an already-answered
    /// question changes nothing and returns the outcome of the stored answer.
    /// Returns `None` only for out-of-range indices.
    pub fn record_answer(&mut self, question: usize, option: usize) -> Option<AnswerOutcome> {
        let q = self.questions.get(question)?;
        if option >= q.options.len() {
            return None;
        }
        let slot = &mut self.answers[question];
        let recorded = match slot {
            Some(existing) => *existing,
            None => {
                *slot = Some(option);
                option
            }
        };
        let q = &self.questions[question];
        Some(AnswerOutcome {
            correct: q.options[recorded].correct,
            correct_option: q.correct_option(),
        })
    }

    /// The recorded option for a question, if any.
    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| a.is_some())
    }

    /// Current state, answer progress, and the final score once complete.
    pub fn status(&self) -> SessionStatus {
        let answered = self.answered_count();
        let total = self.questions.len();
        if !self.is_complete() {
            return SessionStatus {
                state: SessionState::Active,
                answered,
                total,
                score: None,
            };
        }

        let correct = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| a.map(|i| q.options[i].correct).unwrap_or(false))
            .count();
        let percentage = ((correct as f64 / total as f64) * 100.0).round() as u32;
        SessionStatus {
            state: SessionState::Complete,
            answered,
            total,
            score: Some(FinalScore {
                correct,
                total,
                percentage,
                band: ScoreBand::from_percentage(percentage),
            }),
        }
    }
}
