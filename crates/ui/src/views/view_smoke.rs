use std::sync::Arc;

use serde_json::json;

use pm_core::{ProjectId, ProjectQuery};
use services::{ApiTransport, ProjectService};

use crate::alerts::DISMISS_AFTER;

use super::projects::{DeleteOutcome, delete_then_refetch};
use super::test_harness::{
    FakeTransport, RecordedCall, ViewKind, project_json, setup_view_harness,
};

const GET_PROJECTS: &str = "/project/GET/get-projects";
const GET_PROJECT_BY_ID: &str = "/project/GET/get-project-by-id";
const GET_STATUSES: &str = "/project/GET/get-project-statuses";
const DELETE_PROJECT: &str = "/project/DELETE/delete-project";
const CHECK_SESSION: &str = "/authentication/GET/check-session";

#[tokio::test(flavor = "current_thread")]
async fn projects_view_shows_skeletons_while_fetch_is_outstanding() {
    let transport = FakeTransport::default()
        .respond(GET_PROJECTS, json!({ "message": "ok", "projects": [] }))
        .gated();
    let mut harness = setup_view_harness(ViewKind::Projects, transport);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("skeleton"), "missing skeletons in {html}");

    harness.transport.release();
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("skeleton"), "skeletons survived in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn projects_view_renders_populated_grid() {
    let transport = FakeTransport::default().respond(
        GET_PROJECTS,
        json!({
            "message": "ok",
            "projects": [
                project_json(1, "Aurora", Some("2024-02-15")),
                project_json(2, "Borealis", None)
            ]
        }),
    );
    let mut harness = setup_view_harness(ViewKind::Projects, transport);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Aurora"), "missing project in {html}");
    assert!(html.contains("Borealis"), "missing project in {html}");
    assert!(html.contains("In Progress"), "missing status chip in {html}");
    assert!(html.contains("Due N/A"), "missing date fallback in {html}");
    assert!(html.contains("Delete"), "missing delete button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn projects_view_invites_first_project_when_empty() {
    let transport = FakeTransport::default()
        .respond(GET_PROJECTS, json!({ "message": "ok", "projects": [] }));
    let mut harness = setup_view_harness(ViewKind::Projects, transport);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Create your first project"),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn searching_an_empty_collection_reports_no_results() {
    let transport = FakeTransport::default()
        .respond(GET_PROJECTS, json!({ "message": "ok", "projects": [] }));
    let mut harness = setup_view_harness(ViewKind::ProjectsSearching("zeppelin"), transport);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("No results for"),
        "missing no-results copy in {html}"
    );
    assert!(html.contains("zeppelin"), "missing the term in {html}");
    assert!(
        !html.contains("Create your first project"),
        "wrong empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn project_detail_renders_fetched_fields() {
    let transport = FakeTransport::default().respond(
        GET_PROJECT_BY_ID,
        json!({ "message": "ok", "project": project_json(3, "Aurora", Some("2024-02-15")) }),
    );
    let mut harness = setup_view_harness(ViewKind::ProjectDetail(3), transport);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Aurora"), "missing name in {html}");
    assert!(html.contains("PRJ-3"), "missing unique id in {html}");
    assert!(html.contains("Andrea Rossi"), "missing creator in {html}");
    assert!(html.contains("Back to projects"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn project_detail_shows_skeleton_while_fetch_is_outstanding() {
    let transport = FakeTransport::default()
        .respond(
            GET_PROJECT_BY_ID,
            json!({ "message": "ok", "project": project_json(3, "Aurora", None) }),
        )
        .gated();
    let mut harness = setup_view_harness(ViewKind::ProjectDetail(3), transport);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("skeleton"), "missing skeleton in {html}");
    assert!(!html.contains("Idle"), "painted a state name in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn project_detail_reports_missing_project() {
    let transport = FakeTransport::default().reject(GET_PROJECT_BY_ID, 404);
    let mut harness = setup_view_harness(ViewKind::ProjectDetail(99), transport);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("does not exist"),
        "missing not-found message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn creator_renders_status_lookup_table() {
    let transport = FakeTransport::default().respond(
        GET_STATUSES,
        json!({
            "message": "ok",
            "project_statuses": [
                { "project_status_id": 1, "name": "Planning", "color": "warning" },
                { "project_status_id": 2, "name": "In Progress", "color": "primary" }
            ]
        }),
    );
    let mut harness = setup_view_harness(ViewKind::Creator, transport);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Planning"), "missing status option in {html}");
    assert!(html.contains("In Progress"), "missing status option in {html}");
    assert!(html.contains("Create project"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn auth_view_starts_in_login_mode() {
    let mut harness = setup_view_harness(ViewKind::Auth, FakeTransport::default());

    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Sign in to your account"),
        "missing login heading in {html}"
    );
    assert!(html.contains("Create one"), "missing mode switch in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn alert_host_paints_pushed_alerts() {
    let mut harness = setup_view_harness(ViewKind::SeededAlerts, FakeTransport::default());

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Project deleted"), "missing success in {html}");
    assert!(html.contains("alert-success"), "missing class in {html}");
    assert!(
        html.contains("Couldn't delete project"),
        "missing danger in {html}"
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn toast_auto_dismisses_after_its_pusher_unmounts() {
    let mut harness = setup_view_harness(ViewKind::OrphanedToast, FakeTransport::default());

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Project deleted"), "missing toast in {html}");
    assert!(
        !html.contains("toast-pusher"),
        "pusher survived in {html}"
    );

    tokio::time::advance(DISMISS_AFTER).await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("Project deleted"), "toast survived in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_session_check_lands_on_the_auth_screen() {
    let transport = FakeTransport::default().reject(CHECK_SESSION, 401);
    let mut harness = setup_view_harness(ViewKind::FullApp, transport);

    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("Sign in to your account"),
        "expected the auth screen in {html}"
    );
    assert!(!html.contains("Dashboard"), "leaked authed tree into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn successful_session_check_redirects_to_the_dashboard() {
    let transport = FakeTransport::default()
        .respond(CHECK_SESSION, json!({ "message": "valid" }));
    let mut harness = setup_view_harness(ViewKind::FullApp, transport);

    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("Welcome to your project manager"),
        "expected the dashboard in {html}"
    );
    assert!(
        !html.contains("Sign in to your account"),
        "leaked the auth screen into {html}"
    );
}

#[tokio::test]
async fn delete_success_refetches_exactly_once() {
    let transport = Arc::new(
        FakeTransport::default()
            .respond(DELETE_PROJECT, json!({ "message": "ok" }))
            .respond(GET_PROJECTS, json!({ "message": "ok", "projects": [] })),
    );
    let transport_dyn: Arc<dyn ApiTransport> = transport.clone();
    let service = ProjectService::new(transport_dyn);

    let outcome =
        delete_then_refetch(&service, ProjectId::new(7), &ProjectQuery::default()).await;

    assert!(matches!(outcome, DeleteOutcome::Deleted(Some(_))));
    assert_eq!(
        transport.calls(),
        vec![
            RecordedCall::Delete(DELETE_PROJECT.to_string()),
            RecordedCall::Get(GET_PROJECTS.to_string()),
        ]
    );
}

#[tokio::test]
async fn rejected_delete_never_refetches() {
    let transport = Arc::new(FakeTransport::default().reject(DELETE_PROJECT, 403));
    let transport_dyn: Arc<dyn ApiTransport> = transport.clone();
    let service = ProjectService::new(transport_dyn);

    let outcome =
        delete_then_refetch(&service, ProjectId::new(7), &ProjectQuery::default()).await;

    assert!(matches!(outcome, DeleteOutcome::Rejected));
    assert_eq!(
        transport.calls(),
        vec![RecordedCall::Delete(DELETE_PROJECT.to_string())]
    );
}
