use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::error;

use pm_core::{Project, ProjectId, ProjectQuery, SortKey, SortOrder, sort_projects};

use crate::alerts::Alerts;
use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ProjectCardVm, map_project_cards};

const SKELETON_CARDS: usize = 6;

/// Which of the four list states to paint. Loading always wins; a populated
/// grid beats either empty state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListContent {
    Skeletons,
    Grid,
    NoMatches,
    FirstProject,
}

pub(crate) fn list_content(loading: bool, is_empty: bool, term: &str) -> ListContent {
    if loading {
        ListContent::Skeletons
    } else if !is_empty {
        ListContent::Grid
    } else if !term.trim().is_empty() {
        ListContent::NoMatches
    } else {
        ListContent::FirstProject
    }
}

pub(crate) enum DeleteOutcome {
    /// The server deleted the project. Holds the re-fetched collection, or
    /// `None` when the follow-up fetch failed (list stays as-is).
    Deleted(Option<Vec<Project>>),
    /// The server rejected the deletion; nothing was re-fetched.
    Rejected,
}

/// Delete a project, then re-fetch the collection exactly once on success.
pub(crate) async fn delete_then_refetch(
    service: &services::ProjectService,
    id: ProjectId,
    query: &ProjectQuery,
) -> DeleteOutcome {
    if let Err(err) = service.delete_project(id).await {
        error!("failed to delete project {id}: {err}");
        return DeleteOutcome::Rejected;
    }
    match service.list_projects(query).await {
        Ok(fetched) => DeleteOutcome::Deleted(Some(fetched)),
        Err(err) => {
            error!("failed to re-fetch projects: {err}");
            DeleteOutcome::Deleted(None)
        }
    }
}

/// `initial_search` seeds the search box, for callers that land here
/// already filtered; the plain route leaves it unset.
#[component]
pub fn ProjectsView(initial_search: Option<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let alerts = use_context::<Alerts>();
    let service = ctx.project_service();

    let mut search = use_signal(move || initial_search.unwrap_or_default());
    let mut sort_key = use_signal(SortKey::default);
    let mut sort_order = use_signal(SortOrder::default);
    let collection = use_signal(Vec::<Project>::new);
    let loading = use_signal(|| true);

    // Fetch on mount and on every search change. A failed fetch leaves the
    // held collection untouched; the user keeps whatever was on screen.
    {
        let service = service.clone();
        use_effect(move || {
            let query = ProjectQuery::search(&search());
            let service = service.clone();
            let mut collection = collection;
            let mut loading = loading;
            spawn(async move {
                loading.set(true);
                match service.list_projects(&query).await {
                    Ok(fetched) => collection.set(fetched),
                    Err(err) => error!("failed to fetch projects: {err}"),
                }
                loading.set(false);
            });
        });
    }

    // Delete, then re-fetch the whole collection on success. A rejected
    // delete changes nothing locally.
    let on_delete = {
        let service = service.clone();
        use_callback(move |id: ProjectId| {
            let service = service.clone();
            let query = ProjectQuery::search(&search.peek());
            let mut collection = collection;
            let mut loading = loading;
            let mut alerts = alerts;
            spawn(async move {
                loading.set(true);
                match delete_then_refetch(&service, id, &query).await {
                    DeleteOutcome::Deleted(fetched) => {
                        alerts.success("Project deleted", "The project has been removed.");
                        if let Some(fetched) = fetched {
                            collection.set(fetched);
                        }
                    }
                    DeleteOutcome::Rejected => {
                        alerts.danger(
                            "Couldn't delete project",
                            "The server rejected the deletion. Try again.",
                        );
                    }
                }
                loading.set(false);
            });
        })
    };

    // The displayed list is a pure function of (collection, key, order);
    // re-sorting never re-fetches.
    let mut visible = collection();
    sort_projects(&mut visible, sort_key(), sort_order());
    let cards = map_project_cards(&visible);
    let term = search();
    let content = list_content(loading(), cards.is_empty(), &term);

    rsx! {
        div { class: "page projects",
            header { class: "page-header",
                div {
                    h2 { "Projects" }
                    p { class: "subtitle", "Manage your projects" }
                }
                Link { class: "button primary", to: Route::ProjectCreate {}, "New Project" }
            }

            div { class: "list-controls",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search projects...",
                    value: "{term}",
                    oninput: move |event| search.set(event.value()),
                }
                select {
                    class: "sort-key",
                    onchange: move |event| {
                        let key = match event.value().as_str() {
                            "start" => SortKey::StartDate,
                            "end" => SortKey::EndDate,
                            _ => SortKey::CreatedAt,
                        };
                        sort_key.set(key);
                    },
                    option { value: "created", "Created" }
                    option { value: "start", "Start date" }
                    option { value: "end", "End date" }
                }
                button {
                    class: "sort-order",
                    onclick: move |_| {
                        let toggled = sort_order.peek().toggled();
                        sort_order.set(toggled);
                    },
                    match sort_order() {
                        SortOrder::Ascending => "Ascending",
                        SortOrder::Descending => "Descending",
                    }
                }
            }

            match content {
                ListContent::Skeletons => rsx! {
                    div { class: "project-grid",
                        for index in 0..SKELETON_CARDS {
                            div { class: "project-card skeleton", key: "{index}" }
                        }
                    }
                },
                ListContent::Grid => rsx! {
                    div { class: "project-grid",
                        for card in cards {
                            ProjectCard { card, on_delete }
                        }
                    }
                },
                ListContent::NoMatches => rsx! {
                    div { class: "empty-state",
                        p { "No results for \"{term}\"" }
                        p { class: "subtitle", "Try a different search term." }
                    }
                },
                ListContent::FirstProject => rsx! {
                    div { class: "empty-state",
                        p { "Create your first project" }
                        Link { class: "button primary", to: Route::ProjectCreate {}, "Get started" }
                    }
                },
            }
        }
    }
}

#[component]
fn ProjectCard(card: ProjectCardVm, on_delete: Callback<ProjectId>) -> Element {
    let id = card.id;

    rsx! {
        div { class: "project-card", key: "{card.id}",
            Link { class: "card-main", to: Route::ProjectDetail { id: id.value() },
                h3 { "{card.name}" }
                if !card.description.is_empty() {
                    p { class: "description", "{card.description}" }
                }
            }
            span { class: "chip chip-{card.status_color}", "{card.status_name}" }
            div { class: "card-meta",
                span { class: "members", "{card.member_count} members" }
                span { class: "deadline", "Due {card.end_date_str}" }
            }
            div { class: "card-avatars",
                for initials in card.member_initials.iter().take(3) {
                    span { class: "avatar", "{initials}" }
                }
            }
            button {
                class: "button danger",
                onclick: move |_| on_delete.call(id),
                "Delete"
            }
        }
    }
}
