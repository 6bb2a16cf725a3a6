use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use business::domain::university::model::University;

use crate::document::{Document, Value};

/// Maps `universities/{id}` documents. Field names keep the original
/// camelCase convention of the Firestore data.
pub struct UniversityEntity {
    pub id: Uuid,
    pub name: String,
    pub domain: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UniversityEntity {
    pub fn from_document(document: &Document) -> Option<Self> {
        Some(Self {
            id: document.doc_id().and_then(|raw| Uuid::parse_str(raw).ok())?,
            name: document.string_field("name")?.to_string(),
            domain: document.optional_string_field("domain"),
            created_at: document.timestamp_field("createdAt")?,
        })
    }

    pub fn into_domain(self) -> University {
        University::from_repository(self.id, self.name, self.domain, self.created_at)
    }

    pub fn fields(university: &University) -> HashMap<String, Value> {
        HashMap::from([
            ("name".to_string(), Value::string(&university.name)),
            (
                "domain".to_string(),
                Value::optional_string(university.domain.as_deref()),
            ),
            (
                "createdAt".to_string(),
                Value::timestamp(university.created_at),
            ),
        ])
    }
}
