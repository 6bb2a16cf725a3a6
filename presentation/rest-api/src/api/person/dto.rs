use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::person::model::Person;

#[derive(Debug, Clone, Object)]
pub struct CreatePersonRequest {
    /// Person name (cannot be empty)
    pub name: String,
    /// Contact email
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    /// Student id issued by the university
    #[oai(skip_serializing_if_is_none)]
    pub student_id: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdatePersonRequest {
    /// New name; omit to keep the current one
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New email; omit to keep, send "" to clear
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    /// New student id; omit to keep, send "" to clear
    #[oai(skip_serializing_if_is_none)]
    pub student_id: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct PersonResponse {
    /// Person unique identifier
    pub id: String,
    /// Person name
    pub name: String,
    /// Contact email
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    /// Student id issued by the university
    #[oai(skip_serializing_if_is_none)]
    pub student_id: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.to_string(),
            name: person.name,
            email: person.email,
            student_id: person.student_id,
            created_at: person.created_at,
        }
    }
}
