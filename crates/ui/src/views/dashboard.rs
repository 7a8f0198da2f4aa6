use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

/// Landing page of the authenticated tree. The numbers are placeholders
/// until the API grows aggregate endpoints.
#[component]
pub fn DashboardView() -> Element {
    rsx! {
        div { class: "page dashboard",
            header { class: "page-header",
                div {
                    h2 { "Dashboard" }
                    p { class: "subtitle", "Welcome to your project manager" }
                }
            }

            div { class: "stat-grid",
                StatCard { label: "Active projects", value: "12" }
                StatCard { label: "Completed tasks", value: "48" }
                StatCard { label: "Team members", value: "8" }
                StatCard { label: "Events today", value: "5" }
            }

            div { class: "quick-actions",
                h3 { "Quick actions" }
                Link { class: "button primary", to: Route::ProjectCreate {}, "New project" }
                Link { class: "button", to: Route::Projects {}, "Browse projects" }
                Link { class: "button", to: Route::Tasks {}, "Open tasks" }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: &'static str) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}
