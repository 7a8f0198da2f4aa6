use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use pm_core::{NewProject, Project, ProjectId, ProjectQuery, ProjectStatus};

use crate::error::ApiError;
use crate::transport::ApiTransport;

const GET_PROJECTS_PATH: &str = "/project/GET/get-projects";
const GET_PROJECT_BY_ID_PATH: &str = "/project/GET/get-project-by-id";
const GET_STATUSES_PATH: &str = "/project/GET/get-project-statuses";
const CREATE_PROJECT_PATH: &str = "/project/POST/create-project";
const DELETE_PROJECT_PATH: &str = "/project/DELETE/delete-project";

#[derive(Debug, Deserialize)]
struct ProjectListEnvelope {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct ProjectEnvelope {
    project: Project,
}

#[derive(Debug, Deserialize)]
struct StatusListEnvelope {
    project_statuses: Vec<ProjectStatus>,
}

/// Typed client for the project endpoints.
///
/// Filtering is the server's job: every query variation is a fresh GET.
/// The service holds no state beyond the transport handle.
#[derive(Clone)]
pub struct ProjectService {
    transport: Arc<dyn ApiTransport>,
}

impl ProjectService {
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetches the full set of projects matching `query`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or an unexpected response
    /// envelope.
    pub async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, ApiError> {
        let value = self
            .transport
            .get(GET_PROJECTS_PATH, &query.to_params())
            .await?;
        let envelope: ProjectListEnvelope = serde_json::from_value(value)?;
        Ok(envelope.projects)
    }

    /// Fetches a single project by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or an unexpected response
    /// envelope; an unknown id surfaces as the server's non-2xx status.
    pub async fn get_project(&self, id: ProjectId) -> Result<Project, ApiError> {
        let params = [("project_id".to_string(), id.to_string())];
        let value = self.transport.get(GET_PROJECT_BY_ID_PATH, &params).await?;
        let envelope: ProjectEnvelope = serde_json::from_value(value)?;
        Ok(envelope.project)
    }

    /// Fetches the status lookup table.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or an unexpected response
    /// envelope.
    pub async fn list_statuses(&self) -> Result<Vec<ProjectStatus>, ApiError> {
        let value = self.transport.get(GET_STATUSES_PATH, &[]).await?;
        let envelope: StatusListEnvelope = serde_json::from_value(value)?;
        Ok(envelope.project_statuses)
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the server rejects the payload.
    pub async fn create_project(&self, project: &NewProject) -> Result<(), ApiError> {
        self.transport
            .post(CREATE_PROJECT_PATH, json!({ "project_data": project }))
            .await?;
        Ok(())
    }

    /// Removes a project from the remote collection. The id travels in the
    /// request body, matching the server's route contract.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the server rejects the deletion.
    pub async fn delete_project(&self, id: ProjectId) -> Result<(), ApiError> {
        self.transport
            .delete(DELETE_PROJECT_PATH, json!({ "project_id": id }))
            .await?;
        Ok(())
    }
}
