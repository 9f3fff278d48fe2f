use dioxus::prelude::*;

use services::{OptionFeedback, QuizAdvance, QuizRound, StudySession};
use tutor_core::model::QuizQuestion;

use crate::context::AppContext;
use crate::views::{Notice, NoticeLevel, notify};

fn option_class(selection: Option<OptionFeedback>, choice: usize) -> &'static str {
    match selection {
        Some(feedback) if feedback.selected == choice => {
            if feedback.correct {
                "quiz-option correct"
            } else {
                "quiz-option incorrect"
            }
        }
        _ => "quiz-option",
    }
}

fn render_question(
    question: &'static QuizQuestion,
    mut round: Signal<QuizRound>,
    selection: Option<OptionFeedback>,
) -> Element {
    rsx! {
        h3 { "{question.text()}" }
        div { class: "quiz-options",
            for (choice, option) in question.options().iter().enumerate() {
                button {
                    key: "{choice}",
                    class: option_class(selection, choice),
                    // One-shot: the engine ignores every selection after
                    // the first, and the options render inert.
                    disabled: selection.is_some(),
                    onclick: move |_| {
                        round.write().select_option(choice);
                    },
                    "{option}"
                }
            }
        }
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<Option<StudySession>>>();
    let notice = use_context::<Signal<Option<Notice>>>();
    let mut round = use_signal(QuizRound::new);

    let question = round.read().current_question();
    let selection = round.read().selection();
    let position = round.read().current_index() + 1;
    let total = round.read().total();

    let on_next = use_callback(move |_: ()| {
        let advance = round.write().advance();
        let QuizAdvance::Finished(result) = advance else {
            return;
        };

        let mut guard = session.write();
        let Some(active) = guard.as_mut() else {
            tracing::debug!("quiz finished with nobody logged in, result dropped");
            return;
        };
        match ctx.quiz().submit(active, result) {
            Ok(()) => {
                let line = ctx.chat().responder().quiz_feedback(result.score, result.total);
                notify(
                    notice,
                    NoticeLevel::Success,
                    format!("Quiz finished! Score: {}/{}. {line}", result.score, result.total),
                );
            }
            Err(err) => notify(notice, NoticeLevel::Error, err.to_string()),
        }
    });

    rsx! {
        div { class: "page",
            h2 { "Quiz" }
            p { class: "quiz-progress", "Question {position} of {total}" }
            if let Some(question) = question {
                {render_question(question, round, selection)}
            } else {
                p { "No quiz questions available." }
            }
            button { class: "primary", onclick: move |_| on_next.call(()), "Next" }
        }
    }
}
