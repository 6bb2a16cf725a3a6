use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::text::normalize_optional;

use super::errors::MembershipError;

/// Role of a member within a club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberRole {
    Owner,
    Officer,
    #[default]
    Member,
}

impl MemberRole {
    pub fn parse(raw: &str) -> Result<Self, MembershipError> {
        match raw {
            "owner" => Ok(Self::Owner),
            "officer" => Ok(Self::Officer),
            "member" => Ok(Self::Member),
            _ => Err(MembershipError::InvalidRole),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Officer => "officer",
            Self::Member => "member",
        }
    }
}

/// Whether a membership is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

impl MemberStatus {
    pub fn parse(raw: &str) -> Result<Self, MembershipError> {
        match raw {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(MembershipError::InvalidStatus),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Membership {
    pub id: Uuid,
    pub person_id: Uuid,
    pub role: MemberRole,
    pub status: MemberStatus,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    pub fn new(
        person_id: Uuid,
        role: Option<MemberRole>,
        status: Option<MemberStatus>,
        title: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            person_id,
            role: role.unwrap_or_default(),
            status: status.unwrap_or_default(),
            title: normalize_optional(title),
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        person_id: Uuid,
        role: MemberRole,
        status: MemberStatus,
        title: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            person_id,
            role,
            status,
            title,
            created_at,
        }
    }
}

/// A membership joined with the member's name and email, for club rosters.
#[derive(Debug, Clone)]
pub struct MembershipWithPerson {
    pub membership: Membership,
    /// `None` when the referenced person no longer exists.
    pub person_name: Option<String>,
    pub person_email: Option<String>,
}
