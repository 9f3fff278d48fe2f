use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tutor_core::model::{ProgressError, ProgressRecord};

/// Persisted shape of a progress record.
///
/// Mirrors the domain type so the repository can serialize and deserialize
/// without leaking storage concerns into the domain layer; invariants are
/// re-checked on the way back in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ProgressRecordDto {
    pub quiz: QuizProgressDto,
    pub practice: PracticeProgressDto,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct QuizProgressDto {
    pub score: u32,
    pub total: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PracticeProgressDto {
    pub completed: BTreeSet<u32>,
    pub correct: u32,
    pub total: u32,
}

impl ProgressRecordDto {
    #[must_use]
    pub fn from_record(record: &ProgressRecord) -> Self {
        Self {
            quiz: QuizProgressDto {
                score: record.quiz().score(),
                total: record.quiz().total(),
                completed: record.quiz().is_completed(),
            },
            practice: PracticeProgressDto {
                completed: record.practice().completed().clone(),
                correct: record.practice().correct(),
                total: record.practice().total(),
            },
            last_activity: record.last_activity(),
        }
    }

    /// Convert the persisted shape back into a domain record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the stored values violate record
    /// invariants.
    pub fn into_record(self) -> Result<ProgressRecord, ProgressError> {
        ProgressRecord::from_persisted(
            self.quiz.score,
            self.quiz.total,
            self.quiz.completed,
            self.practice.completed,
            self.practice.correct,
            self.practice.total,
            self.last_activity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::time::fixed_now;

    #[test]
    fn dto_round_trips_a_record() {
        let mut record = ProgressRecord::starter(3, 5);
        record.record_practice_check(2, true, fixed_now()).unwrap();
        record.record_quiz_result(2, 3, fixed_now());

        let dto = ProgressRecordDto::from_record(&record);
        let rebuilt = dto.into_record().unwrap();
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn dto_rejects_tampered_values() {
        let dto = ProgressRecordDto {
            quiz: QuizProgressDto {
                score: 7,
                total: 3,
                completed: true,
            },
            practice: PracticeProgressDto {
                completed: BTreeSet::new(),
                correct: 0,
                total: 5,
            },
            last_activity: None,
        };
        assert!(dto.into_record().is_err());
    }
}
