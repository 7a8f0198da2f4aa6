use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{ProjectStatusId, UserId};

/// Per-field failures of [`ProjectDraft::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProjectDraftError {
    #[error("project name is required and must be at least 3 characters")]
    NameTooShort,

    #[error("description must be at least 10 characters when given")]
    DescriptionTooShort,

    #[error("end date must be after the start date")]
    EndBeforeStart,

    #[error("a project status is required")]
    MissingStatus,
}

impl ProjectDraftError {
    /// Which form field the error belongs to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort => "name",
            Self::DescriptionTooShort => "description",
            Self::EndBeforeStart => "end_date",
            Self::MissingStatus => "status",
        }
    }
}

/// What the create form collects before submission.
///
/// All validation the app does client-side lives in [`Self::validate`];
/// everything else (member existence, name uniqueness, ...) is the
/// server's job and comes back as a plain request failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<ProjectStatusId>,
    pub members: Vec<UserId>,
}

/// The serialized `project_data` body of the create-project endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub project_status_id: ProjectStatusId,
    pub members: Vec<UserId>,
}

impl ProjectDraft {
    /// Checks every field and returns all failures at once, so the form can
    /// mark each offending input rather than stopping at the first.
    ///
    /// # Errors
    ///
    /// Returns the non-empty list of field errors when any check fails.
    pub fn validate(&self) -> Result<NewProject, Vec<ProjectDraftError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.len() < 3 {
            errors.push(ProjectDraftError::NameTooShort);
        }

        let description = self.description.trim();
        if !description.is_empty() && description.len() < 10 {
            errors.push(ProjectDraftError::DescriptionTooShort);
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end <= start
        {
            errors.push(ProjectDraftError::EndBeforeStart);
        }

        if self.status.is_none() {
            errors.push(ProjectDraftError::MissingStatus);
        }

        let Some(status) = self.status else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewProject {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            start_date: self.start_date,
            end_date: self.end_date,
            project_status_id: status,
            members: self.members.clone(),
        })
    }
}
