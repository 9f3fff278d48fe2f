use std::sync::Arc;

use storage::ProgressRepository;
use tutor_core::Clock;
use tutor_core::content;
use tutor_core::model::{QuizQuestion, QuizResult};

use crate::error::ProgressSyncError;
use crate::session_service::StudySession;

/// Feedback for the single answered selection of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionFeedback {
    pub selected: usize,
    pub correct: bool,
}

/// What advancing the round produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAdvance {
    /// Moved on to the next question.
    Next,
    /// Stepped past the final question; the round has been reset for
    /// replay.
    Finished(QuizResult),
}

/// In-memory stepper over the static question sequence.
///
/// Selecting an option is one-shot per question: the first selection is
/// scored and every later one is ignored. Advancing past the final
/// question emits the result and resets the round.
#[derive(Debug, Clone)]
pub struct QuizRound {
    questions: &'static [QuizQuestion],
    current: usize,
    score: u32,
    selection: Option<OptionFeedback>,
}

impl QuizRound {
    #[must_use]
    pub fn new() -> Self {
        Self::with_questions(content::quiz_questions())
    }

    #[must_use]
    pub fn with_questions(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            selection: None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The selection already made for the current question, if any.
    #[must_use]
    pub fn selection(&self) -> Option<OptionFeedback> {
        self.selection
    }

    /// Select an option for the current question.
    ///
    /// Returns `None` when the question was already answered or `choice`
    /// does not name an option; the round is unchanged in both cases.
    pub fn select_option(&mut self, choice: usize) -> Option<OptionFeedback> {
        if self.selection.is_some() {
            return None;
        }
        let question = self.current_question()?;
        if choice >= question.options().len() {
            return None;
        }

        let feedback = OptionFeedback {
            selected: choice,
            correct: question.is_correct(choice),
        };
        if feedback.correct {
            self.score = self.score.saturating_add(1);
        }
        self.selection = Some(feedback);
        Some(feedback)
    }

    /// Step to the next question, or finish and reset after the last one.
    pub fn advance(&mut self) -> QuizAdvance {
        self.current += 1;
        self.selection = None;
        if self.current >= self.questions.len() {
            let result = QuizResult {
                score: self.score,
                total: self.total(),
            };
            self.current = 0;
            self.score = 0;
            QuizAdvance::Finished(result)
        } else {
            QuizAdvance::Next
        }
    }
}

impl Default for QuizRound {
    fn default() -> Self {
        Self::new()
    }
}

/// Persists finished quiz rounds into the progress record.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>) -> Self {
        Self { clock, progress }
    }

    /// Write a finished round into the session's record and persist it.
    ///
    /// A resubmission fully overwrites the previous quiz outcome; there is
    /// no history.
    ///
    /// # Errors
    ///
    /// Returns `ProgressSyncError::Storage` if persistence fails.
    pub fn submit(
        &self,
        session: &mut StudySession,
        result: QuizResult,
    ) -> Result<(), ProgressSyncError> {
        let now = self.clock.now();
        session
            .progress_mut()
            .record_quiz_result(result.score, result.total, now);
        self.progress
            .upsert(session.user().id(), session.progress())?;
        tracing::info!(
            user = %session.user().id(),
            score = result.score,
            total = result.total,
            "quiz submitted"
        );
        Ok(())
    }
}
