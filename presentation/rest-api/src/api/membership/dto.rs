use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::membership::model::{Membership, MembershipWithPerson};

#[derive(Debug, Clone, Object)]
pub struct AddMemberRequest {
    /// Id of the person to add to the club
    pub person_id: String,
    /// Role: "owner", "officer" or "member" (default "member")
    #[oai(skip_serializing_if_is_none)]
    pub role: Option<String>,
    /// Status: "active" or "inactive" (default "active")
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<String>,
    /// Free-form title, e.g. "Treasurer"
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateMemberRequest {
    /// New role; omit to keep the current one
    #[oai(skip_serializing_if_is_none)]
    pub role: Option<String>,
    /// New status; omit to keep the current one
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<String>,
    /// New title; omit to keep, send "" to clear
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct MemberResponse {
    /// Membership unique identifier
    pub id: String,
    /// Id of the person this membership belongs to
    pub person_id: String,
    /// Person name, when the person still exists
    #[oai(skip_serializing_if_is_none)]
    pub person_name: Option<String>,
    /// Person email, when the person still exists
    #[oai(skip_serializing_if_is_none)]
    pub person_email: Option<String>,
    /// Role within the club
    pub role: String,
    /// Membership status
    pub status: String,
    /// Free-form title
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Membership> for MemberResponse {
    fn from(membership: Membership) -> Self {
        Self {
            id: membership.id.to_string(),
            person_id: membership.person_id.to_string(),
            person_name: None,
            person_email: None,
            role: membership.role.as_str().to_string(),
            status: membership.status.as_str().to_string(),
            title: membership.title,
            created_at: membership.created_at,
        }
    }
}

impl From<MembershipWithPerson> for MemberResponse {
    fn from(entry: MembershipWithPerson) -> Self {
        let mut response: Self = entry.membership.into();
        response.person_name = entry.person_name;
        response.person_email = entry.person_email;
        response
    }
}
