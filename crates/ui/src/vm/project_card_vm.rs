use chrono::NaiveDate;

use pm_core::{Project, ProjectId};

/// Everything a project card renders, pre-formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCardVm {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status_name: String,
    pub status_color: String,
    pub start_date_str: String,
    pub end_date_str: String,
    pub created_at_str: String,
    pub member_count: usize,
    pub member_initials: Vec<String>,
}

impl ProjectCardVm {
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.project_id,
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            status_name: project.project_status.name.clone(),
            status_color: project.project_status.color.clone(),
            start_date_str: format_date(project.start_date),
            end_date_str: format_date(project.end_date),
            created_at_str: project.created_at.format("%d %b %Y").to_string(),
            member_count: project.project_members.len(),
            member_initials: project.member_users().map(pm_core::User::initials).collect(),
        }
    }
}

#[must_use]
pub fn map_project_cards(projects: &[Project]) -> Vec<ProjectCardVm> {
    projects.iter().map(ProjectCardVm::from_project).collect()
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "N/A".to_string(), |d| d.format("%d %b %Y").to_string())
}
