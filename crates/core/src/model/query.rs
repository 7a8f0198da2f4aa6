use chrono::NaiveDate;

use crate::model::ids::{ProjectStatusId, UserId};

/// Server-side filter parameters for the project list.
///
/// Filtering is delegated to the API wholesale: changing any field means a
/// re-fetch, never a local recomputation. Sorting, by contrast, is local
/// (see [`crate::model::sort_projects`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub search: Option<String>,
    pub status: Option<ProjectStatusId>,
    pub member: Option<UserId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ProjectQuery {
    /// A query carrying only a search term. Blank terms collapse to the
    /// empty query so the request carries no `search` parameter at all.
    #[must_use]
    pub fn search(term: &str) -> Self {
        let trimmed = term.trim();
        Self {
            search: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            ..Self::default()
        }
    }

    /// Query-string pairs for the `get-projects` request.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            let trimmed = search.trim();
            if !trimmed.is_empty() {
                params.push(("search".to_string(), trimmed.to_string()));
            }
        }
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.to_string()));
        }
        if let Some(member) = self.member {
            params.push(("member".to_string(), member.to_string()));
        }
        if let Some(from) = self.from {
            params.push(("from".to_string(), from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            params.push(("to".to_string(), to.format("%Y-%m-%d").to_string()));
        }
        params
    }
}
