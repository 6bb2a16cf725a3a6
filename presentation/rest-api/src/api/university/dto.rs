use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::university::model::University;

#[derive(Debug, Clone, Object)]
pub struct CreateUniversityRequest {
    /// University name (cannot be empty)
    pub name: String,
    /// Email domain of the university, e.g. "uta.edu"
    #[oai(skip_serializing_if_is_none)]
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateUniversityRequest {
    /// New name; omit to keep the current one
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New domain; omit to keep, send "" to clear
    #[oai(skip_serializing_if_is_none)]
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UniversityResponse {
    /// University unique identifier
    pub id: String,
    /// University name
    pub name: String,
    /// Email domain of the university
    #[oai(skip_serializing_if_is_none)]
    pub domain: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<University> for UniversityResponse {
    fn from(university: University) -> Self {
        Self {
            id: university.id.to_string(),
            name: university.name,
            domain: university.domain,
            created_at: university.created_at,
        }
    }
}
