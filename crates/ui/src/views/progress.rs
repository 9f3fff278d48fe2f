use dioxus::prelude::*;

use services::StudySession;

use crate::vm::map_progress;

#[component]
pub fn ProgressView() -> Element {
    let session = use_context::<Signal<Option<StudySession>>>();
    let snapshot = session
        .read()
        .as_ref()
        .map(|active| (active.user().display_name().to_string(), map_progress(active.progress())));

    rsx! {
        div { class: "page",
            h2 { "Progress" }
            if let Some((name, vm)) = snapshot {
                p { "Tracking progress for {name}." }
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "width: {vm.bar_width};" }
                }
                p { class: "progress-text", "{vm.overall_label}" }
                div { class: "stats",
                    div { class: "stat",
                        span { class: "stat-value", "{vm.quiz_label}" }
                        span { class: "stat-name", "Quiz" }
                    }
                    div { class: "stat",
                        span { class: "stat-value", "{vm.practice_label}" }
                        span { class: "stat-name", "Practice" }
                    }
                    div { class: "stat",
                        span { class: "stat-value", "{vm.completed_label}" }
                        span { class: "stat-name", "Exercises done" }
                    }
                }
                h3 { "Recent activity" }
                if vm.activity.is_empty() {
                    p { "No activity yet. Complete quizzes and practice exercises to see your progress!" }
                } else {
                    ul { class: "activity",
                        for (i, line) in vm.activity.iter().enumerate() {
                            li { key: "{i}", "{line}" }
                        }
                    }
                }
            } else {
                p { "Log in to see your progress." }
            }
        }
    }
}
