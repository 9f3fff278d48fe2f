use dioxus::prelude::*;

use services::{PracticeError, StudySession};

use crate::context::AppContext;
use crate::views::{Notice, NoticeLevel, notify};

#[derive(Clone, Debug, PartialEq, Eq)]
struct FeedbackLine {
    message: String,
    correct: bool,
}

impl FeedbackLine {
    fn class_name(&self) -> &'static str {
        if self.correct {
            "feedback correct"
        } else {
            "feedback incorrect"
        }
    }
}

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<Option<StudySession>>>();
    let notice = use_context::<Signal<Option<Notice>>>();

    let exercises = ctx.practice().exercises();
    let count = exercises.len();
    let mut answers = use_signal(|| vec![String::new(); count]);
    let mut feedback = use_signal(|| vec![None::<FeedbackLine>; count]);

    let logged_out = session.read().is_none();

    let on_reset = use_callback({
        let ctx = ctx.clone();
        move |_: ()| {
            let mut guard = session.write();
            let Some(active) = guard.as_mut() else {
                tracing::debug!("practice reset ignored, nobody logged in");
                return;
            };
            match ctx.practice().reset(active) {
                Ok(()) => {
                    answers.set(vec![String::new(); count]);
                    feedback.set(vec![None; count]);
                    notify(notice, NoticeLevel::Info, "Practice activities reset");
                }
                Err(err) => notify(notice, NoticeLevel::Error, err.to_string()),
            }
        }
    });

    let ctx_for_items = ctx.clone();
    let items = exercises.iter().enumerate().map(move |(idx, exercise)| {
        let ctx = ctx_for_items.clone();
        let number = (idx + 1) as u32;
        let value = answers.read()[idx].clone();
        let line = feedback.read()[idx].clone();

        rsx! {
            div { class: "practice-activity", key: "{number}",
                h3 { "Activity {number}" }
                p { "{exercise.text()}" }
                p { class: "hint", em { "Hint: {exercise.hint()}" } }
                div { class: "input-group",
                    input {
                        r#type: "number",
                        step: "any",
                        placeholder: "Your answer",
                        value: "{value}",
                        oninput: move |evt| {
                            answers.write()[idx] = evt.value();
                        },
                    }
                    button {
                        onclick: move |_| {
                            let raw = answers.read()[idx].clone();
                            let mut guard = session.write();
                            let Some(active) = guard.as_mut() else {
                                tracing::debug!("practice check ignored, nobody logged in");
                                return;
                            };
                            match ctx.practice().check(active, number, &raw) {
                                Ok(result) => {
                                    let message = if result.correct {
                                        "✓ Correct! Well done!"
                                    } else {
                                        "✗ Incorrect. Try again!"
                                    };
                                    feedback.write()[idx] = Some(FeedbackLine {
                                        message: message.to_string(),
                                        correct: result.correct,
                                    });
                                }
                                Err(PracticeError::NotANumber) => {
                                    feedback.write()[idx] = Some(FeedbackLine {
                                        message: "Please enter a valid number".to_string(),
                                        correct: false,
                                    });
                                }
                                Err(err) => {
                                    feedback.write()[idx] = Some(FeedbackLine {
                                        message: err.to_string(),
                                        correct: false,
                                    });
                                }
                            }
                        },
                        "Check Answer"
                    }
                }
                if let Some(line) = line {
                    div { class: "{line.class_name()}", "{line.message}" }
                }
            }
        }
    });

    rsx! {
        div { class: "page",
            h2 { "Practice" }
            if logged_out {
                p { class: "hint", "Log in on the Home page to record your progress." }
            }
            {items}
            button { class: "secondary", onclick: move |_| on_reset.call(()), "Reset all activities" }
        }
    }
}
