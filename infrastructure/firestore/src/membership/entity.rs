use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use business::domain::membership::model::{MemberRole, MemberStatus, Membership};

use crate::document::{Document, Value};

/// Maps `clubs/{club_id}/memberships/{id}` documents. Role and status are
/// stored as their string codes.
pub struct MembershipEntity {
    pub id: Uuid,
    pub person_id: Uuid,
    pub role: MemberRole,
    pub status: MemberStatus,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MembershipEntity {
    pub fn from_document(document: &Document) -> Option<Self> {
        Some(Self {
            id: document.doc_id().and_then(|raw| Uuid::parse_str(raw).ok())?,
            person_id: document
                .string_field("personId")
                .and_then(|raw| Uuid::parse_str(raw).ok())?,
            // Documents written before the role/status vocabulary was fixed
            // may carry other codes; fall back to the defaults rather than
            // dropping the row from rosters.
            role: document.string_field("role").map(|raw| {
                MemberRole::parse(raw).unwrap_or_else(|_| {
                    tracing::warn!("Unknown member role {raw:?}, treating as member");
                    MemberRole::default()
                })
            })?,
            status: document.string_field("status").map(|raw| {
                MemberStatus::parse(raw).unwrap_or_else(|_| {
                    tracing::warn!("Unknown member status {raw:?}, treating as active");
                    MemberStatus::default()
                })
            })?,
            title: document.optional_string_field("title"),
            created_at: document.timestamp_field("createdAt")?,
        })
    }

    pub fn into_domain(self) -> Membership {
        Membership::from_repository(
            self.id,
            self.person_id,
            self.role,
            self.status,
            self.title,
            self.created_at,
        )
    }

    pub fn fields(membership: &Membership) -> HashMap<String, Value> {
        HashMap::from([
            (
                "personId".to_string(),
                Value::string(membership.person_id.to_string()),
            ),
            ("role".to_string(), Value::string(membership.role.as_str())),
            (
                "status".to_string(),
                Value::string(membership.status.as_str()),
            ),
            (
                "title".to_string(),
                Value::optional_string(membership.title.as_deref()),
            ),
            (
                "createdAt".to_string(),
                Value::timestamp(membership.created_at),
            ),
        ])
    }
}
