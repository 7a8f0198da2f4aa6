#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    Credentials, NewProject, Project, ProjectDraft, ProjectDraftError, ProjectId, ProjectMember,
    ProjectMemberId, ProjectQuery, ProjectStatus, ProjectStatusId, Registration, SortKey,
    SortOrder, User, UserId, sort_projects,
};
