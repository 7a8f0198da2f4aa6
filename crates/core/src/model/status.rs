use serde::{Deserialize, Serialize};

use crate::model::ids::ProjectStatusId;

/// A named, colored project category.
///
/// Statuses come from the API as a reference lookup table; this app never
/// creates or mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatus {
    pub project_status_id: ProjectStatusId,
    pub name: String,
    pub color: String,
}
