use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ShapesView() -> Element {
    let ctx = use_context::<AppContext>();
    let chat = ctx.chat();
    let entries = chat.responder().shape_entries();

    rsx! {
        div { class: "page",
            h2 { "Shapes" }
            p { "A quick reference for the shapes covered by the quiz and exercises." }
            div { class: "shape-grid",
                for entry in entries {
                    div { class: "shape-card", key: "{entry.name}",
                        h3 { class: "shape-name", "{entry.name}" }
                        p { "{entry.description}" }
                        ul {
                            if let Some(volume) = entry.volume {
                                li { "{volume}" }
                            }
                            if let Some(area) = entry.area {
                                li { "{area}" }
                            }
                            if let Some(perimeter) = entry.perimeter {
                                li { "{perimeter}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
