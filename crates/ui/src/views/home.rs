use dioxus::prelude::*;

use services::{LoginError, StudySession};

use crate::context::AppContext;
use crate::views::{Notice, NoticeLevel, notify};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<Option<StudySession>>>();
    let notice = use_context::<Signal<Option<Notice>>>();
    let mut name = use_signal(String::new);
    let mut login_error = use_signal(|| None::<String>);

    let do_login = use_callback(move |guest: bool| {
        let typed = name.read().clone();
        match ctx.sessions().login(&typed, guest) {
            Ok(active) => {
                let welcome = format!("Welcome {}!", active.user().display_name());
                session.set(Some(active));
                login_error.set(None);
                notify(notice, NoticeLevel::Info, welcome);
            }
            Err(LoginError::User(_)) => {
                login_error.set(Some("Please enter your name".to_string()));
            }
            Err(err) => {
                login_error.set(Some(err.to_string()));
            }
        }
    });

    let active_name = session
        .read()
        .as_ref()
        .map(|active| active.user().display_name().to_string());

    rsx! {
        div { class: "page",
            h2 { "Home" }
            if let Some(active_name) = active_name {
                p { "Logged in as {active_name}." }
                p {
                    "Use the sidebar to take the quiz, work through the practice "
                    "exercises, review your progress, or ask the tutor a question. "
                    "Logging in with a different name starts over as that student."
                }
            } else {
                p { "Log in with your name, or continue as a guest." }
            }
            div { class: "login",
                div { class: "input-group",
                    input {
                        id: "student-name",
                        placeholder: "Your name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                do_login.call(false);
                            }
                        },
                    }
                    button { class: "primary", onclick: move |_| do_login.call(false), "Start learning" }
                    button { class: "secondary", onclick: move |_| do_login.call(true), "Continue as guest" }
                }
                if let Some(message) = login_error.read().clone() {
                    p { class: "error", "{message}" }
                }
            }
        }
    }
}
