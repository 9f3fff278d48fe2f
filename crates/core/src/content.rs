//! Built-in course content: the quiz question sequence and the practice
//! exercise set. Both are static and immutable.

use crate::model::{PracticeExercise, ProgressRecord, QuizQuestion};

static QUIZ_QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion::new("How many faces does a cube have?", &["4", "6", "8"], 1),
    QuizQuestion::new("Volume of a cylinder?", &["πr²h", "2πrh", "πrh"], 0),
    QuizQuestion::new("Surface area of a sphere?", &["4πr²", "πr²", "2πr"], 0),
];

// Exercises 2 and 4 expect results computed with π ≈ 3.14 and carry a 0.1
// margin; the whole-number exercises accept ±1.
static PRACTICE_EXERCISES: [PracticeExercise; 5] = [
    PracticeExercise::new(
        "Calculate the volume of a cube with side length 4 units.",
        64.0,
        1.0,
        "Volume of cube = side³",
    ),
    PracticeExercise::new(
        "Find the surface area of a sphere with radius 5 units. (Use π = 3.14)",
        314.0,
        0.1,
        "Surface area of sphere = 4πr²",
    ),
    PracticeExercise::new(
        "Calculate the area of a triangle with base 10 units and height 6 units.",
        30.0,
        1.0,
        "Area of triangle = ½ × base × height",
    ),
    PracticeExercise::new(
        "Find the volume of a cylinder with radius 3 units and height 8 units. (Use π = 3.14)",
        226.08,
        0.1,
        "Volume of cylinder = πr²h",
    ),
    PracticeExercise::new(
        "Calculate the perimeter of a rectangle with length 12 units and width 7 units.",
        38.0,
        1.0,
        "Perimeter of rectangle = 2(length + width)",
    ),
];

/// The fixed, ordered quiz question sequence.
#[must_use]
pub fn quiz_questions() -> &'static [QuizQuestion] {
    &QUIZ_QUESTIONS
}

/// The fixed practice exercise set, addressed by 1-based index.
#[must_use]
pub fn practice_exercises() -> &'static [PracticeExercise] {
    &PRACTICE_EXERCISES
}

/// Number of quiz questions.
#[must_use]
pub fn quiz_total() -> u32 {
    QUIZ_QUESTIONS.len() as u32
}

/// Number of practice exercises.
#[must_use]
pub fn practice_total() -> u32 {
    PRACTICE_EXERCISES.len() as u32
}

/// Starter progress record sized to the built-in content.
#[must_use]
pub fn starter_progress() -> ProgressRecord {
    ProgressRecord::starter(quiz_total(), practice_total())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_totals_match_content() {
        assert_eq!(quiz_total(), 3);
        assert_eq!(practice_total(), 5);

        let starter = starter_progress();
        assert_eq!(starter.quiz().total(), 3);
        assert_eq!(starter.practice().total(), 5);
    }

    #[test]
    fn every_question_has_a_valid_correct_option() {
        for question in quiz_questions() {
            let correct = (0..question.options().len())
                .filter(|&choice| question.is_correct(choice))
                .count();
            assert_eq!(correct, 1, "{}", question.text());
        }
    }

    #[test]
    fn exact_expected_answer_is_always_correct() {
        for exercise in practice_exercises() {
            assert!(exercise.judge(exercise.expected()), "{}", exercise.text());
        }
    }

    #[test]
    fn answers_past_tolerance_are_always_incorrect() {
        for exercise in practice_exercises() {
            let off = exercise.tolerance() + 0.01;
            assert!(
                !exercise.judge(exercise.expected() + off),
                "{}",
                exercise.text()
            );
            assert!(
                !exercise.judge(exercise.expected() - off),
                "{}",
                exercise.text()
            );
        }
    }
}
