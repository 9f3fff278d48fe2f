use tutor_core::model::ProgressRecord;

/// Render-ready view of a progress record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub quiz_label: String,
    pub practice_label: String,
    pub completed_label: String,
    pub overall_label: String,
    pub bar_width: String,
    pub activity: Vec<String>,
}

#[must_use]
pub fn map_progress(record: &ProgressRecord) -> ProgressVm {
    let quiz = record.quiz();
    let practice = record.practice();

    // The quiz counts toward the overall figure only once a run has been
    // completed.
    let quiz_percent = if quiz.is_completed() {
        percent(quiz.score(), quiz.total())
    } else {
        0
    };
    let practice_percent = percent(practice.correct(), practice.total());
    let overall_percent = (quiz_percent + practice_percent + 1) / 2;

    let completed_count = practice.completed().len();

    let mut activity = Vec::new();
    if quiz.is_completed() {
        activity.push(format!(
            "✓ Completed quiz with score: {}/{}",
            quiz.score(),
            quiz.total()
        ));
    }
    if completed_count > 0 {
        activity.push(format!("✓ Completed {completed_count} practice exercises"));
        activity.push(format!(
            "✓ Practice score: {}/{} correct",
            practice.correct(),
            practice.total()
        ));
    }
    if let Some(at) = record.last_activity() {
        activity.push(format!("Last activity: {}", at.format("%Y-%m-%d %H:%M UTC")));
    }

    ProgressVm {
        quiz_label: format!("{quiz_percent}%"),
        practice_label: format!("{practice_percent}%"),
        completed_label: format!("{completed_count}/{}", practice.total()),
        overall_label: format!("{overall_percent}% Complete"),
        bar_width: format!("{overall_percent}%"),
        activity,
    }
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        0
    } else {
        (part * 100 + whole / 2) / whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::time::fixed_now;

    #[test]
    fn fresh_record_maps_to_zeroes() {
        let vm = map_progress(&ProgressRecord::starter(3, 5));
        assert_eq!(vm.quiz_label, "0%");
        assert_eq!(vm.practice_label, "0%");
        assert_eq!(vm.completed_label, "0/5");
        assert_eq!(vm.overall_label, "0% Complete");
        assert!(vm.activity.is_empty());
    }

    #[test]
    fn incomplete_quiz_does_not_count_toward_overall() {
        let mut record = ProgressRecord::starter(3, 5);
        record.record_practice_check(1, true, fixed_now()).unwrap();
        // Quiz untouched: overall reflects practice only.
        let vm = map_progress(&record);
        assert_eq!(vm.quiz_label, "0%");
        assert_eq!(vm.practice_label, "20%");
        assert_eq!(vm.overall_label, "10% Complete");
    }

    #[test]
    fn completed_quiz_and_practice_round_to_the_mean() {
        let mut record = ProgressRecord::starter(3, 5);
        record.record_practice_check(2, true, fixed_now()).unwrap();
        record.record_quiz_result(2, 3, fixed_now());

        let vm = map_progress(&record);
        assert_eq!(vm.quiz_label, "67%");
        assert_eq!(vm.practice_label, "20%");
        // round((67 + 20) / 2) = 44
        assert_eq!(vm.overall_label, "44% Complete");
        assert_eq!(vm.bar_width, "44%");
        assert_eq!(vm.completed_label, "1/5");
    }

    #[test]
    fn activity_lists_quiz_practice_and_timestamp() {
        let mut record = ProgressRecord::starter(3, 5);
        record.record_practice_check(1, false, fixed_now()).unwrap();
        record.record_practice_check(3, true, fixed_now()).unwrap();
        record.record_quiz_result(3, 3, fixed_now());

        let vm = map_progress(&record);
        assert_eq!(vm.activity.len(), 4);
        assert_eq!(vm.activity[0], "✓ Completed quiz with score: 3/3");
        assert_eq!(vm.activity[1], "✓ Completed 2 practice exercises");
        assert_eq!(vm.activity[2], "✓ Practice score: 1/5 correct");
        assert!(vm.activity[3].starts_with("Last activity: 2023-11-14"));
    }
}
