use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use business::domain::person::model::Person;

use crate::document::{Document, Value};

/// Maps `people/{id}` documents.
pub struct PersonEntity {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub student_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PersonEntity {
    pub fn from_document(document: &Document) -> Option<Self> {
        Some(Self {
            id: document.doc_id().and_then(|raw| Uuid::parse_str(raw).ok())?,
            name: document.string_field("name")?.to_string(),
            email: document.optional_string_field("email"),
            student_id: document.optional_string_field("studentId"),
            created_at: document.timestamp_field("createdAt")?,
        })
    }

    pub fn into_domain(self) -> Person {
        Person::from_repository(
            self.id,
            self.name,
            self.email,
            self.student_id,
            self.created_at,
        )
    }

    pub fn fields(person: &Person) -> HashMap<String, Value> {
        HashMap::from([
            ("name".to_string(), Value::string(&person.name)),
            (
                "email".to_string(),
                Value::optional_string(person.email.as_deref()),
            ),
            (
                "studentId".to_string(),
                Value::optional_string(person.student_id.as_deref()),
            ),
            ("createdAt".to_string(), Value::timestamp(person.created_at)),
        ])
    }
}
