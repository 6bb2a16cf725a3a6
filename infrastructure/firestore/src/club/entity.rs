use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use business::domain::club::model::Club;

use crate::document::{Document, Value};

/// Maps `clubs/{id}` documents.
pub struct ClubEntity {
    pub id: Uuid,
    pub name: String,
    pub university_id: Uuid,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ClubEntity {
    pub fn from_document(document: &Document) -> Option<Self> {
        Some(Self {
            id: document.doc_id().and_then(|raw| Uuid::parse_str(raw).ok())?,
            name: document.string_field("name")?.to_string(),
            university_id: document
                .string_field("universityId")
                .and_then(|raw| Uuid::parse_str(raw).ok())?,
            description: document.optional_string_field("description"),
            created_at: document.timestamp_field("createdAt")?,
        })
    }

    pub fn into_domain(self) -> Club {
        Club::from_repository(
            self.id,
            self.name,
            self.university_id,
            self.description,
            self.created_at,
        )
    }

    pub fn fields(club: &Club) -> HashMap<String, Value> {
        HashMap::from([
            ("name".to_string(), Value::string(&club.name)),
            (
                "universityId".to_string(),
                Value::string(club.university_id.to_string()),
            ),
            (
                "description".to_string(),
                Value::optional_string(club.description.as_deref()),
            ),
            ("createdAt".to_string(), Value::timestamp(club.created_at)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_through_document_fields() {
        let club = Club::new(
            "Chess Club".to_string(),
            Uuid::new_v4(),
            Some("Weekly blitz nights".to_string()),
        )
        .unwrap();

        let document = Document {
            name: Some(format!(
                "projects/p/databases/(default)/documents/clubs/{}",
                club.id
            )),
            fields: ClubEntity::fields(&club),
        };

        let restored = ClubEntity::from_document(&document).unwrap().into_domain();

        assert_eq!(restored.id, club.id);
        assert_eq!(restored.university_id, club.university_id);
        assert_eq!(restored.description, Some("Weekly blitz nights".to_string()));
    }

    #[test]
    fn should_reject_document_without_university_id() {
        let club = Club::new("Chess Club".to_string(), Uuid::new_v4(), None).unwrap();
        let mut fields = ClubEntity::fields(&club);
        fields.remove("universityId");

        let document = Document {
            name: Some(format!(
                "projects/p/databases/(default)/documents/clubs/{}",
                club.id
            )),
            fields,
        };

        assert!(ClubEntity::from_document(&document).is_none());
    }
}
