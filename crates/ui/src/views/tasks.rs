use dioxus::prelude::*;

/// Placeholder until tasks land on the API.
#[component]
pub fn TasksView() -> Element {
    rsx! {
        div { class: "page tasks",
            h2 { "Tasks" }
            div { class: "empty-state",
                p { "Task management is coming soon." }
            }
        }
    }
}
