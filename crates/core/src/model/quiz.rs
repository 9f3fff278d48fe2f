/// A fixed multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    text: &'static str,
    options: &'static [&'static str],
    correct: usize,
}

impl QuizQuestion {
    /// Builds a question; `correct` must index into `options`.
    #[must_use]
    pub const fn new(
        text: &'static str,
        options: &'static [&'static str],
        correct: usize,
    ) -> Self {
        Self {
            text,
            options,
            correct,
        }
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

/// Result emitted when a quiz run completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
}
