use dioxus::prelude::*;
use dioxus_router::Link;

use pm_core::{Project, ProjectId};
use services::{ApiError, TransportError};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::ProjectCardVm;

fn detail_error(err: &ApiError) -> ViewError {
    match err {
        ApiError::Transport(TransportError::Status(status)) if status.as_u16() == 404 => {
            ViewError::NotFound
        }
        _ => ViewError::Unknown,
    }
}

#[component]
pub fn ProjectDetailView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.project_service();

    let resource = use_resource(move || {
        let service = service.clone();
        async move {
            service
                .get_project(ProjectId::new(id))
                .await
                .map_err(|err| detail_error(&err))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page project-detail",
            Link { class: "button", to: Route::Projects {}, "Back to projects" }

            match state {
                // A paused or stopped resource looks the same as a pending
                // one from here: the project just isn't on screen yet.
                ViewState::Idle | ViewState::Loading => rsx! {
                    div { class: "detail-banner skeleton" }
                },
                ViewState::Ready(project) => rsx! {
                    ProjectBanner { project }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ProjectBanner(project: Project) -> Element {
    let card = ProjectCardVm::from_project(&project);
    let creator = project.created_by.full_name();

    rsx! {
        div { class: "detail-banner",
            h2 { "{project.name}" }
            p { class: "unique-id", "{project.unique_id}" }
            if let Some(description) = &project.description {
                p { class: "description", "{description}" }
            }
            span { class: "chip chip-{card.status_color}", "{card.status_name}" }
            dl { class: "detail-meta",
                dt { "Created by" }
                dd { "{creator}" }
                dt { "Created" }
                dd { "{card.created_at_str}" }
                dt { "Start" }
                dd { "{card.start_date_str}" }
                dt { "End" }
                dd { "{card.end_date_str}" }
                dt { "Members" }
                dd { "{card.member_count}" }
            }
            ul { class: "member-list",
                for member in project.member_users() {
                    li { key: "{member.user_id}", "{member.full_name()}" }
                }
            }
            div { class: "detail-actions",
                // Edit and status change are navigation stubs for now.
                button { class: "button", disabled: true, "Edit project" }
                button { class: "button", disabled: true, "Change status" }
            }
        }
    }
}
