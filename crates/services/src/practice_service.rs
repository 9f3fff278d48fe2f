use std::sync::Arc;

use storage::ProgressRepository;
use tutor_core::Clock;
use tutor_core::content;
use tutor_core::model::{PracticeCheckOutcome, PracticeExercise};

use crate::error::PracticeError;
use crate::session_service::StudySession;

/// Result of judging one practice submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeFeedback {
    /// Whether the submitted answer was within tolerance.
    pub correct: bool,
    /// How the progress record absorbed the check.
    pub outcome: PracticeCheckOutcome,
}

/// Judges practice submissions and records them into progress.
#[derive(Clone)]
pub struct PracticeService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
    exercises: &'static [PracticeExercise],
}

impl PracticeService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>) -> Self {
        Self {
            clock,
            progress,
            exercises: content::practice_exercises(),
        }
    }

    /// The exercise set this service judges against, 1-based by index.
    #[must_use]
    pub fn exercises(&self) -> &'static [PracticeExercise] {
        self.exercises
    }

    /// Check a raw submission for the exercise at 1-based `index`.
    ///
    /// Input that does not parse as a finite number is rejected before any
    /// state changes. The record is persisted only when the check actually
    /// mutated it (first attempt for that index).
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::NotANumber` for unparseable input,
    /// `PracticeError::UnknownExercise` for an index with no exercise, and
    /// storage errors from persistence.
    pub fn check(
        &self,
        session: &mut StudySession,
        index: u32,
        raw_answer: &str,
    ) -> Result<PracticeFeedback, PracticeError> {
        let answer: f64 = raw_answer
            .trim()
            .parse()
            .map_err(|_| PracticeError::NotANumber)?;
        if !answer.is_finite() {
            return Err(PracticeError::NotANumber);
        }

        let exercise = usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.exercises.get(i))
            .ok_or(PracticeError::UnknownExercise(index))?;

        let correct = exercise.judge(answer);
        let now = self.clock.now();
        let outcome = session
            .progress_mut()
            .record_practice_check(index, correct, now)?;
        if outcome.first_attempt {
            self.progress
                .upsert(session.user().id(), session.progress())?;
        }

        Ok(PracticeFeedback { correct, outcome })
    }

    /// Clear all recorded practice outcomes and persist the reset.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Storage` if persistence fails.
    pub fn reset(&self, session: &mut StudySession) -> Result<(), PracticeError> {
        session.progress_mut().reset_practice(self.clock.now());
        self.progress
            .upsert(session.user().id(), session.progress())?;
        tracing::info!(user = %session.user().id(), "practice reset");
        Ok(())
    }
}
