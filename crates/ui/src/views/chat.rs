use dioxus::prelude::*;

use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ChatLine {
    text: String,
    from_user: bool,
}

impl ChatLine {
    fn class_name(&self) -> &'static str {
        if self.from_user {
            "message user-message"
        } else {
            "message tutor-message"
        }
    }
}

const SUGGESTED_QUESTIONS: [&str; 3] = [
    "What is the volume of a cube?",
    "Surface area of a sphere?",
    "What is pi?",
];

#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut input = use_signal(String::new);
    let mut messages = use_signal(Vec::<ChatLine>::new);
    let mut thinking = use_signal(|| false);

    let send = use_callback(move |question: String| {
        let question = question.trim().to_string();
        if question.is_empty() {
            return;
        }
        messages.write().push(ChatLine {
            text: question.clone(),
            from_user: true,
        });
        thinking.set(true);
        let chat = ctx.chat();
        spawn(async move {
            // A newer question supersedes this reply; the indicator stays
            // up until the latest ask resolves.
            if let Some(reply) = chat.ask(&question).await {
                messages.write().push(ChatLine {
                    text: reply,
                    from_user: false,
                });
                thinking.set(false);
            }
        });
    });

    let send_typed = use_callback(move |_: ()| {
        let question = input.read().clone();
        input.set(String::new());
        send.call(question);
    });

    rsx! {
        div { class: "page",
            h2 { "Tutor Chat" }
            div { class: "chat-messages",
                for (i, line) in messages.read().iter().enumerate() {
                    div { key: "{i}", class: "{line.class_name()}", "{line.text}" }
                }
                if thinking() {
                    div { class: "message tutor-message typing",
                        em { "Tutor is thinking..." }
                    }
                }
            }
            div { class: "input-group",
                input {
                    placeholder: "Ask about shapes or formulas",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            send_typed.call(());
                        }
                    },
                }
                button { class: "primary", onclick: move |_| send_typed.call(()), "Send" }
            }
            div { class: "suggestions",
                for question in SUGGESTED_QUESTIONS {
                    button {
                        key: "{question}",
                        class: "chip",
                        onclick: move |_| send.call(question.to_string()),
                        "{question}"
                    }
                }
            }
        }
    }
}
