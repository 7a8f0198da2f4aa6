mod auth;
mod draft;
mod ids;
mod project;
mod query;
mod sort;
mod status;
mod user;

pub use auth::{Credentials, Registration};
pub use draft::{NewProject, ProjectDraft, ProjectDraftError};
pub use ids::{ParseIdError, ProjectId, ProjectMemberId, ProjectStatusId, UserId};
pub use project::{Project, ProjectMember};
pub use query::ProjectQuery;
pub use sort::{SortKey, SortOrder, sort_projects};
pub use status::ProjectStatus;
pub use user::User;
