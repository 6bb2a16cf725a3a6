use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::text::normalize_optional;

use super::errors::PersonError;

#[derive(Debug, Clone)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub student_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Person {
    pub fn new(
        name: String,
        email: Option<String>,
        student_id: Option<String>,
    ) -> Result<Self, PersonError> {
        if name.trim().is_empty() {
            return Err(PersonError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email: normalize_optional(email),
            student_id: normalize_optional(student_id),
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        email: Option<String>,
        student_id: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            student_id,
            created_at,
        }
    }
}
