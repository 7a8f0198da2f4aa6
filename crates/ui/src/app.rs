use dioxus::prelude::*;
use dioxus_router::Router;

use crate::alerts::{AlertHost, Alerts};
use crate::context::AppContext;
use crate::routes::Route;
use crate::session::{self, SessionState};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route titles are rendered inside the
        // content pane.
        document::Title { "Project Manager" }

        AppBody {}
    }
}

/// Everything below the document chrome: session polling, the alert stack
/// and the gated router. Split from [`App`] so tests can render it without
/// the asset pipeline.
#[component]
pub fn AppBody() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session_state = use_context_provider(|| Signal::new(SessionState::Checking));
    use_context_provider(Alerts::new);

    // One check on mount, then a fixed-interval re-check for the lifetime
    // of the app root. The task is scoped to this component, so teardown
    // cancels the timer.
    use_future(move || {
        let auth = ctx.auth_service();
        async move {
            loop {
                let valid = auth.check_session().await;
                session_state.set(SessionState::from_check(valid));
                tokio::time::sleep(session::RECHECK_INTERVAL).await;
            }
        }
    });

    rsx! {
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                if session_state() == SessionState::Checking {
                    div { class: "app-loading",
                        p { "Loading..." }
                    }
                } else {
                    Router::<Route> {}
                }
            }
            AlertHost {}
        }
    }
}
