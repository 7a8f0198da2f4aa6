mod auth;
mod dashboard;
mod project_creator;
mod project_detail;
mod projects;
mod settings;
mod state;
mod tasks;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth::AuthView;
pub use dashboard::DashboardView;
pub use project_creator::ProjectCreatorView;
pub use project_detail::ProjectDetailView;
pub use projects::ProjectsView;
pub use settings::SettingsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use tasks::TasksView;
