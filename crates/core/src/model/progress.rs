use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("quiz score ({score}) exceeds quiz total ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("correct tally ({correct}) exceeds exercise total ({total})")]
    CorrectExceedsTotal { correct: u32, total: u32 },

    #[error("completed exercise index {index} is outside 1..={total}")]
    IndexOutOfRange { index: u32, total: u32 },
}

/// Quiz portion of a progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    score: u32,
    total: u32,
    completed: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Practice portion of a progress record.
///
/// `completed` holds 1-based exercise indices; membership means the
/// exercise has been checked at least once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeProgress {
    completed: BTreeSet<u32>,
    correct: u32,
    total: u32,
}

impl PracticeProgress {
    #[must_use]
    pub fn completed(&self) -> &BTreeSet<u32> {
        &self.completed
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_completed(&self, index: u32) -> bool {
        self.completed.contains(&index)
    }
}

/// Outcome of recording one checked practice attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeCheckOutcome {
    /// Whether this was the first check of the exercise.
    pub first_attempt: bool,
    /// Whether the check incremented the correct tally.
    pub counted_correct: bool,
}

/// Per-user record of quiz and practice outcomes.
///
/// Mutated by quiz submission and practice checks; never deleted from the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    quiz: QuizProgress,
    practice: PracticeProgress,
    last_activity: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    /// Zeroed record for a user with no history yet.
    #[must_use]
    pub fn starter(quiz_total: u32, practice_total: u32) -> Self {
        Self {
            quiz: QuizProgress {
                score: 0,
                total: quiz_total,
                completed: false,
            },
            practice: PracticeProgress {
                completed: BTreeSet::new(),
                correct: 0,
                total: practice_total,
            },
            last_activity: None,
        }
    }

    /// Rehydrate a record from persisted storage, enforcing its invariants.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if a score or tally exceeds its total, or a
    /// completed index falls outside `1..=practice_total`.
    pub fn from_persisted(
        quiz_score: u32,
        quiz_total: u32,
        quiz_completed: bool,
        practice_completed: BTreeSet<u32>,
        practice_correct: u32,
        practice_total: u32,
        last_activity: Option<DateTime<Utc>>,
    ) -> Result<Self, ProgressError> {
        if quiz_score > quiz_total {
            return Err(ProgressError::ScoreExceedsTotal {
                score: quiz_score,
                total: quiz_total,
            });
        }
        if practice_correct > practice_total {
            return Err(ProgressError::CorrectExceedsTotal {
                correct: practice_correct,
                total: practice_total,
            });
        }
        for &index in &practice_completed {
            if index == 0 || index > practice_total {
                return Err(ProgressError::IndexOutOfRange {
                    index,
                    total: practice_total,
                });
            }
        }

        Ok(Self {
            quiz: QuizProgress {
                score: quiz_score,
                total: quiz_total,
                completed: quiz_completed,
            },
            practice: PracticeProgress {
                completed: practice_completed,
                correct: practice_correct,
                total: practice_total,
            },
            last_activity,
        })
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizProgress {
        &self.quiz
    }

    #[must_use]
    pub fn practice(&self) -> &PracticeProgress {
        &self.practice
    }

    #[must_use]
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.last_activity
    }

    /// Overwrite the quiz outcome with a fresh submission.
    ///
    /// Replaces the previous result entirely; there is no history.
    pub fn record_quiz_result(&mut self, score: u32, total: u32, at: DateTime<Utc>) {
        self.quiz = QuizProgress {
            score: score.min(total),
            total,
            completed: true,
        };
        self.last_activity = Some(at);
    }

    /// Record one checked practice attempt.
    ///
    /// The first check of an index marks it completed whether or not the
    /// answer was right, and the correct tally counts only indices whose
    /// first check was right. Re-checking a completed index changes
    /// nothing, including `last_activity`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::IndexOutOfRange` if `index` is outside
    /// `1..=practice_total`.
    pub fn record_practice_check(
        &mut self,
        index: u32,
        correct: bool,
        at: DateTime<Utc>,
    ) -> Result<PracticeCheckOutcome, ProgressError> {
        if index == 0 || index > self.practice.total {
            return Err(ProgressError::IndexOutOfRange {
                index,
                total: self.practice.total,
            });
        }

        if self.practice.completed.contains(&index) {
            return Ok(PracticeCheckOutcome {
                first_attempt: false,
                counted_correct: false,
            });
        }

        self.practice.completed.insert(index);
        if correct {
            self.practice.correct = self.practice.correct.saturating_add(1);
        }
        self.last_activity = Some(at);

        Ok(PracticeCheckOutcome {
            first_attempt: true,
            counted_correct: correct,
        })
    }

    /// Clear all practice outcomes and stamp the activity time.
    pub fn reset_practice(&mut self, at: DateTime<Utc>) {
        self.practice.completed.clear();
        self.practice.correct = 0;
        self.last_activity = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn starter() -> ProgressRecord {
        ProgressRecord::starter(3, 5)
    }

    #[test]
    fn starter_record_is_zeroed() {
        let record = starter();
        assert_eq!(record.quiz().score(), 0);
        assert_eq!(record.quiz().total(), 3);
        assert!(!record.quiz().is_completed());
        assert!(record.practice().completed().is_empty());
        assert_eq!(record.practice().correct(), 0);
        assert_eq!(record.practice().total(), 5);
        assert_eq!(record.last_activity(), None);
    }

    #[test]
    fn first_check_marks_completed_even_when_wrong() {
        let mut record = starter();
        let outcome = record
            .record_practice_check(1, false, fixed_now())
            .unwrap();

        assert!(outcome.first_attempt);
        assert!(!outcome.counted_correct);
        assert!(record.practice().is_completed(1));
        assert_eq!(record.practice().correct(), 0);
        assert_eq!(record.last_activity(), Some(fixed_now()));
    }

    #[test]
    fn recheck_of_completed_index_changes_nothing() {
        let mut record = starter();
        record.record_practice_check(2, true, fixed_now()).unwrap();
        assert_eq!(record.practice().correct(), 1);

        let later = fixed_now() + chrono::Duration::minutes(5);
        let outcome = record.record_practice_check(2, true, later).unwrap();
        assert!(!outcome.first_attempt);
        assert!(!outcome.counted_correct);
        assert_eq!(record.practice().correct(), 1);
        assert_eq!(record.practice().completed().len(), 1);
        // A no-op recheck must not look like fresh activity.
        assert_eq!(record.last_activity(), Some(fixed_now()));
    }

    #[test]
    fn wrong_then_right_does_not_count_correct() {
        let mut record = starter();
        record.record_practice_check(3, false, fixed_now()).unwrap();
        let outcome = record.record_practice_check(3, true, fixed_now()).unwrap();

        assert!(!outcome.first_attempt);
        assert_eq!(record.practice().correct(), 0);
        assert!(record.practice().is_completed(3));
    }

    #[test]
    fn check_rejects_out_of_range_index() {
        let mut record = starter();
        let err = record.record_practice_check(0, true, fixed_now()).unwrap_err();
        assert!(matches!(err, ProgressError::IndexOutOfRange { .. }));
        let err = record.record_practice_check(6, true, fixed_now()).unwrap_err();
        assert!(matches!(err, ProgressError::IndexOutOfRange { index: 6, total: 5 }));
    }

    #[test]
    fn quiz_submission_overwrites_previous_result() {
        let mut record = starter();
        record.record_quiz_result(2, 3, fixed_now());
        assert_eq!(record.quiz().score(), 2);
        assert!(record.quiz().is_completed());

        record.record_quiz_result(1, 3, fixed_now());
        assert_eq!(record.quiz().score(), 1);
        assert_eq!(record.quiz().total(), 3);
        assert!(record.quiz().is_completed());
    }

    #[test]
    fn reset_practice_clears_outcomes() {
        let mut record = starter();
        record.record_practice_check(1, true, fixed_now()).unwrap();
        record.record_practice_check(4, false, fixed_now()).unwrap();

        let later = fixed_now() + chrono::Duration::minutes(1);
        record.reset_practice(later);
        assert!(record.practice().completed().is_empty());
        assert_eq!(record.practice().correct(), 0);
        assert_eq!(record.last_activity(), Some(later));
    }

    #[test]
    fn from_persisted_rejects_invariant_violations() {
        let err = ProgressRecord::from_persisted(4, 3, true, BTreeSet::new(), 0, 5, None)
            .unwrap_err();
        assert!(matches!(err, ProgressError::ScoreExceedsTotal { .. }));

        let err = ProgressRecord::from_persisted(0, 3, false, BTreeSet::new(), 6, 5, None)
            .unwrap_err();
        assert!(matches!(err, ProgressError::CorrectExceedsTotal { .. }));

        let err = ProgressRecord::from_persisted(
            0,
            3,
            false,
            BTreeSet::from([1, 9]),
            1,
            5,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ProgressError::IndexOutOfRange { index: 9, .. }));
    }

    #[test]
    fn from_persisted_roundtrips_a_mutated_record() {
        let mut record = starter();
        record.record_practice_check(2, true, fixed_now()).unwrap();
        record.record_quiz_result(2, 3, fixed_now());

        let rebuilt = ProgressRecord::from_persisted(
            record.quiz().score(),
            record.quiz().total(),
            record.quiz().is_completed(),
            record.practice().completed().clone(),
            record.practice().correct(),
            record.practice().total(),
            record.last_activity(),
        )
        .unwrap();
        assert_eq!(rebuilt, record);
    }
}
