use std::cmp::Ordering;

use crate::model::project::Project;

/// Which date column drives the local ordering of the held collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    CreatedAt,
    StartDate,
    EndDate,
}

impl SortKey {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CreatedAt => "Created",
            Self::StartDate => "Start date",
            Self::EndDate => "End date",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sorts the collection in place by the given key and direction.
///
/// Missing start/end dates compare as the earliest possible value, so they
/// lead in ascending order and trail in descending order. The sort is
/// stable: equal keys keep server order.
pub fn sort_projects(projects: &mut [Project], key: SortKey, order: SortOrder) {
    projects.sort_by(|a, b| {
        let ordering: Ordering = match key {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            // `None < Some(_)` gives the nulls-first ascending behavior.
            SortKey::StartDate => a.start_date.cmp(&b.start_date),
            SortKey::EndDate => a.end_date.cmp(&b.end_date),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}
