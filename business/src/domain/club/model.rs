use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::text::normalize_optional;

use super::errors::ClubError;

#[derive(Debug, Clone)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub university_id: Uuid,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Club {
    pub fn new(
        name: String,
        university_id: Uuid,
        description: Option<String>,
    ) -> Result<Self, ClubError> {
        if name.trim().is_empty() {
            return Err(ClubError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            university_id,
            description: normalize_optional(description),
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        university_id: Uuid,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            university_id,
            description,
            created_at,
        }
    }
}

/// A club joined with the name of its owning university, for listings.
#[derive(Debug, Clone)]
pub struct ClubWithUniversity {
    pub club: Club,
    /// `None` when the referenced university no longer exists.
    pub university_name: Option<String>,
}
