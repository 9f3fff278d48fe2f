/// A fixed practice exercise with a numeric answer.
///
/// `tolerance` is the permitted deviation still judged correct. It is
/// declared per exercise: results computed from an approximated π carry a
/// tight margin, whole-number results a looser one.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeExercise {
    text: &'static str,
    expected: f64,
    tolerance: f64,
    hint: &'static str,
}

impl PracticeExercise {
    #[must_use]
    pub const fn new(
        text: &'static str,
        expected: f64,
        tolerance: f64,
        hint: &'static str,
    ) -> Self {
        Self {
            text,
            expected,
            tolerance,
            hint,
        }
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub fn expected(&self) -> f64 {
        self.expected
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn hint(&self) -> &'static str {
        self.hint
    }

    /// Judge an answer against the expected value and tolerance.
    #[must_use]
    pub fn judge(&self, answer: f64) -> bool {
        (answer - self.expected).abs() <= self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judge_accepts_answers_within_tolerance() {
        let exercise = PracticeExercise::new("Surface area of a sphere, r = 5", 314.0, 0.1, "4πr²");
        assert!(exercise.judge(314.0));
        assert!(exercise.judge(313.95));
        assert!(exercise.judge(314.1));
    }

    #[test]
    fn judge_rejects_answers_past_tolerance() {
        let exercise = PracticeExercise::new("Surface area of a sphere, r = 5", 314.0, 0.1, "4πr²");
        assert!(!exercise.judge(314.2));
        assert!(!exercise.judge(313.8));
        assert!(!exercise.judge(0.0));
    }
}
