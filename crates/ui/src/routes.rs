use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use services::StudySession;

use crate::context::AppContext;
use crate::views::{
    ChatView, HomeView, Notice, PracticeView, ProgressView, QuizView, ShapesView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/practice", PracticeView)] Practice {},
        #[route("/progress", ProgressView)] Progress {},
        #[route("/shapes", ShapesView)] Shapes {},
        #[route("/chat", ChatView)] Chat {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();

    // The active session lives at the layout root so every view shares it.
    // Restoring a persisted session at startup is best-effort; a failed
    // read just starts logged out.
    use_context_provider(|| Signal::new(ctx.sessions().restore().ok().flatten()));
    use_context_provider(|| Signal::new(None::<Notice>));

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                NoticeBar {}
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let session = use_context::<Signal<Option<StudySession>>>();
    let welcome = session
        .read()
        .as_ref()
        .map(|active| format!("Welcome, {}!", active.user().display_name()));

    rsx! {
        nav { class: "sidebar",
            h1 { "Geometry Tutor" }
            if let Some(welcome) = welcome {
                p { class: "welcome", "{welcome}" }
            }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Quiz {}, "Quiz" } }
                li { Link { to: Route::Practice {}, "Practice" } }
                li { Link { to: Route::Progress {}, "Progress" } }
                li { Link { to: Route::Shapes {}, "Shapes" } }
                li { Link { to: Route::Chat {}, "Tutor Chat" } }
            }
        }
    }
}

#[component]
fn NoticeBar() -> Element {
    let mut notice = use_context::<Signal<Option<Notice>>>();
    let current = notice.read().clone();

    rsx! {
        if let Some(current) = current {
            div { class: "notice {current.level.class_name()}",
                span { "{current.message}" }
                button { class: "dismiss", onclick: move |_| notice.set(None), "×" }
            }
        }
    }
}
