use std::sync::Arc;

use services::{AuthService, ProjectService};

/// What the composition root (e.g. `crates/app`) must supply to the UI.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn projects(&self) -> Arc<ProjectService>;
}

/// Service handles shared by every view through the Dioxus context tree.
#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    projects: Arc<ProjectService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            projects: app.projects(),
        }
    }

    #[must_use]
    pub fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn project_service(&self) -> Arc<ProjectService> {
        Arc::clone(&self.projects)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
