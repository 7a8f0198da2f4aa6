use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};

use crate::session::{GuardDecision, SessionState, guard_decision};
use crate::views::{
    AuthView, DashboardView, ProjectCreatorView, ProjectDetailView, ProjectsView, SettingsView,
    TasksView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Guard)]
        #[route("/", AuthView)] Auth {},
        #[layout(Shell)]
            #[route("/dashboard", DashboardView)] Dashboard {},
            #[route("/projects", ProjectsView)] Projects {},
            #[route("/projects/create", ProjectCreatorView)] ProjectCreate {},
            #[route("/projects/:id", ProjectDetailView)] ProjectDetail { id: u64 },
            #[route("/tasks", TasksView)] Tasks {},
            #[route("/settings", SettingsView)] Settings {},
        #[end_layout]
        #[route("/:..segments", NotFound)] NotFound { segments: Vec<String> },
}

/// Gates the whole route tree on the session flag. The redirect table is
/// static: unauthenticated sessions land on the auth screen, authenticated
/// ones never see it again.
#[component]
fn Guard() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let on_auth_screen = matches!(route, Route::Auth {});

    use_effect(move || match guard_decision(session(), on_auth_screen) {
        GuardDecision::RedirectToAuth => {
            navigator.replace(Route::Auth {});
        }
        GuardDecision::RedirectToDashboard => {
            navigator.replace(Route::Dashboard {});
        }
        GuardDecision::Allow => {}
    });

    // Never paint a tree the session does not allow, not even for the
    // frame before the redirect lands.
    if guard_decision(session(), on_auth_screen) != GuardDecision::Allow {
        return rsx! {
            div { class: "app-loading" }
        };
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Sidebar plus content pane for the authenticated tree.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Project Manager" }
            ul {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::Projects {}, "Projects" } }
                li { Link { to: Route::Tasks {}, "Tasks" } }
                li { Link { to: Route::Settings {}, "Settings" } }
            }
        }
    }
}

/// Catch-all: unknown paths collapse to the default route of whichever
/// tree the session allows.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let session = use_context::<Signal<SessionState>>();
    let navigator = use_navigator();

    use_effect(move || {
        let target = if session().is_authenticated() {
            Route::Dashboard {}
        } else {
            Route::Auth {}
        };
        navigator.replace(target);
    });

    rsx! {
        div { class: "app-loading" }
    }
}
