use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use serde_json::{Value, json};
use tokio::sync::Notify;

use services::{ApiTransport, AuthService, ProjectService, TransportError};

use crate::alerts::{AlertHost, Alerts};
use crate::app::AppBody;
use crate::context::{AppContext, UiApp, build_app_context};
use crate::session::SessionState;
use crate::views::{AuthView, DashboardView, ProjectCreatorView, ProjectDetailView, ProjectsView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RecordedCall {
    Get(String),
    Post(String),
    Delete(String),
}

/// Scripts responses per path and records everything it is asked.
///
/// An optional gate holds every response until `release` is called, so
/// tests can observe the in-flight (skeleton) state deterministically.
#[derive(Default)]
pub(crate) struct FakeTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<HashMap<String, VecDeque<Result<Value, TransportError>>>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeTransport {
    pub(crate) fn respond(self, path: &str, value: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(Ok(value));
        self
    }

    pub(crate) fn reject(self, path: &str, status: u16) -> Self {
        let status = reqwest_status(status);
        self.responses
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(Err(TransportError::Status(status)));
        self
    }

    /// Hold all responses until [`Self::release`] fires.
    pub(crate) fn gated(self) -> Self {
        *self.gate.lock().unwrap() = Some(Arc::new(Notify::new()));
        self
    }

    pub(crate) fn release(&self) {
        if let Some(notify) = self.gate.lock().unwrap().as_ref() {
            notify.notify_one();
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn wait_for_gate(&self) {
        let gate = self.gate.lock().unwrap().clone();
        if let Some(notify) = gate {
            notify.notified().await;
        }
    }

    fn next_response(&self, path: &str) -> Result<Value, TransportError> {
        self.responses
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("no scripted response for {path}"))
    }
}

fn reqwest_status(code: u16) -> reqwest::StatusCode {
    reqwest::StatusCode::from_u16(code).expect("valid status code")
}

#[async_trait]
impl ApiTransport for FakeTransport {
    async fn get(&self, path: &str, _query: &[(String, String)]) -> Result<Value, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Get(path.to_string()));
        self.wait_for_gate().await;
        self.next_response(path)
    }

    async fn post(&self, path: &str, _body: Value) -> Result<Value, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Post(path.to_string()));
        self.wait_for_gate().await;
        self.next_response(path)
    }

    async fn delete(&self, path: &str, _body: Value) -> Result<Value, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Delete(path.to_string()));
        self.wait_for_gate().await;
        self.next_response(path)
    }
}

pub(crate) fn project_json(id: u64, name: &str, end_date: Option<&str>) -> Value {
    json!({
        "project_id": id,
        "unique_id": format!("PRJ-{id}"),
        "name": name,
        "description": "A sample project for the harness.",
        "start_date": "2024-01-01",
        "end_date": end_date,
        "project_status_id": 2,
        "project_status": {
            "project_status_id": 2,
            "name": "In Progress",
            "color": "primary"
        },
        "created_by_id": 1,
        "created_by": {
            "user_id": 1,
            "name": "Andrea",
            "surname": "Rossi",
            "email": "andrea@example.com"
        },
        "created_at": "2024-01-01T09:30:00Z",
        "project_members": []
    })
}

struct TestApp {
    auth: Arc<AuthService>,
    projects: Arc<ProjectService>,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn projects(&self) -> Arc<ProjectService> {
        Arc::clone(&self.projects)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewKind {
    Auth,
    Dashboard,
    Projects,
    ProjectsSearching(&'static str),
    ProjectDetail(u64),
    Creator,
    SeededAlerts,
    OrphanedToast,
    FullApp,
}

#[derive(Props, Clone)]
struct HarnessProps {
    context: AppContext,
    view: ViewKind,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn Harness(props: HarnessProps) -> Element {
    use_context_provider(|| props.context.clone());

    if props.view == ViewKind::FullApp {
        // The real root: provides its own session/alert contexts.
        return rsx! {
            AppBody {}
        };
    }

    use_context_provider(|| Signal::new(SessionState::Authenticated));
    use_context_provider(Alerts::new);
    use_context_provider(|| props.view);

    rsx! {
        Router::<TestRoute> {}
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Auth => rsx! { AuthView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Projects => rsx! { ProjectsView {} },
        ViewKind::ProjectsSearching(term) => rsx! {
            ProjectsView { initial_search: Some(term.to_string()) }
        },
        ViewKind::ProjectDetail(id) => rsx! { ProjectDetailView { id } },
        ViewKind::Creator => rsx! { ProjectCreatorView {} },
        ViewKind::SeededAlerts => rsx! { SeededAlerts {} },
        ViewKind::OrphanedToast => rsx! { OrphanedToast {} },
        ViewKind::FullApp => unreachable!("FullApp bypasses the test router"),
    }
}

/// Pushes one of each alert on mount so the host has something to paint.
#[component]
fn SeededAlerts() -> Element {
    let mut alerts = use_context::<Alerts>();
    use_hook(move || {
        alerts.success("Project deleted", "The project has been removed.");
        alerts.danger("Couldn't delete project", "The server rejected the deletion.");
    });

    rsx! {
        AlertHost {}
    }
}

/// Hosts a pusher that removes itself from the tree right after pushing,
/// leaving the toast behind with its component gone.
#[component]
fn OrphanedToast() -> Element {
    let mut mounted = use_signal(|| true);

    rsx! {
        if mounted() {
            ToastPusher { on_pushed: move |()| mounted.set(false) }
        }
        AlertHost {}
    }
}

#[component]
fn ToastPusher(on_pushed: Callback<()>) -> Element {
    let mut alerts = use_context::<Alerts>();
    use_hook(move || {
        alerts.success("Project deleted", "The project has been removed.");
        on_pushed.call(());
    });

    rsx! {
        div { class: "toast-pusher" }
    }
}

pub(crate) struct ViewHarness {
    pub(crate) dom: VirtualDom,
    pub(crate) transport: Arc<FakeTransport>,
}

impl ViewHarness {
    pub(crate) fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub(crate) async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub(crate) fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub(crate) fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub(crate) fn setup_view_harness(view: ViewKind, transport: FakeTransport) -> ViewHarness {
    let transport: Arc<FakeTransport> = Arc::new(transport);
    let transport_dyn: Arc<dyn ApiTransport> = transport.clone();
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        auth: Arc::new(AuthService::new(Arc::clone(&transport_dyn))),
        projects: Arc::new(ProjectService::new(transport_dyn)),
    });
    let context = build_app_context(&app);

    let dom = VirtualDom::new_with_props(Harness, HarnessProps { context, view });

    ViewHarness { dom, transport }
}
