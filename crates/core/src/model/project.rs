use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{ProjectId, ProjectMemberId, ProjectStatusId, UserId};
use crate::model::status::ProjectStatus;
use crate::model::user::User;

/// One row of the project/member join table, with the referenced user
/// embedded when the server expands it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub project_member_id: ProjectMemberId,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// The core domain entity: a named unit of work with status, dates and members.
///
/// Projects are owned by the server; this type is the wire shape of the
/// `get-projects` response. Nothing here is persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: ProjectId,
    /// Public-facing unique identifier, distinct from the numeric row id.
    pub unique_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "opt_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "opt_date")]
    pub end_date: Option<NaiveDate>,
    pub project_status_id: ProjectStatusId,
    pub project_status: ProjectStatus,
    pub created_by_id: UserId,
    pub created_by: User,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub project_members: Vec<ProjectMember>,
}

impl Project {
    /// Members with an expanded user record, in server order.
    pub fn member_users(&self) -> impl Iterator<Item = &User> {
        self.project_members
            .iter()
            .filter_map(|member| member.user.as_ref())
    }
}

/// Calendar dates arrive either bare (`2024-02-15`) or as a full timestamp
/// (`2024-02-15T00:00:00.000Z`) depending on the endpoint. Accept both,
/// always serialize bare.
mod opt_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(text) => {
                let date_part = text.get(..10).unwrap_or(&text);
                NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                    .map(Some)
                    .map_err(|_| D::Error::custom(format!("invalid date: {text}")))
            }
        }
    }
}
