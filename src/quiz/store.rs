//! In-memory answer store.
//!
//! Append-only, ordered by question number, at most [`SESSION_ANSWERS`]
//! entries. The invariants are enforced on every `record` call so the rest
//! of the engine can rely on them.

use crate::error::QuizError;
use crate::quiz::types::Answer;

/// Total answers in a complete session.
pub const SESSION_ANSWERS: usize = 20;

/// Ordered list of recorded answers for one session.
#[derive(Debug, Default)]
pub struct AnswerStore {
    answers: Vec<Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, enforcing the session invariants: at most 20
    /// answers, question numbers in 1..=20, strictly increasing.
    pub fn record(&mut self, answer: Answer) -> Result<(), QuizError> {
        if self.answers.len() >= SESSION_ANSWERS {
            return Err(QuizError::SessionFull {
                max: SESSION_ANSWERS,
            });
        }
        let number = answer.question_number;
        if number < 1 || number > SESSION_ANSWERS as u32 {
            return Err(QuizError::NumberOutOfRange {
                number,
                max: SESSION_ANSWERS as u32,
            });
        }
        if let Some(last) = self.answers.last() {
            if number <= last.question_number {
                return Err(QuizError::NonMonotonic {
                    number,
                    last: last.question_number,
                });
            }
        }
        self.answers.push(answer);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Whether all 20 answers have been collected.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == SESSION_ANSWERS
    }

    pub fn as_slice(&self) -> &[Answer] {
        &self.answers
    }

    /// Question number the next recorded answer must carry.
    pub fn next_number(&self) -> u32 {
        self.answers
            .last()
            .map(|a| a.question_number + 1)
            .unwrap_or(1)
    }

    /// Every question text asked so far, in order.
    pub fn question_texts(&self) -> Vec<String> {
        self.answers.iter().map(|a| a.question_text.clone()).collect()
    }

    /// Every option string offered so far, in order. Used for option
    /// de-duplication when generating adaptive questions.
    pub fn offered_options(&self) -> Vec<String> {
        self.answers
            .iter()
            .flat_map(|a| a.options.iter().cloned())
            .collect()
    }
}
