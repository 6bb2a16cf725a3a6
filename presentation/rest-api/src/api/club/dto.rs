use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::club::model::{Club, ClubWithUniversity};

#[derive(Debug, Clone, Object)]
pub struct CreateClubRequest {
    /// Club name (cannot be empty)
    pub name: String,
    /// Id of the university the club belongs to
    pub university_id: String,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateClubRequest {
    /// New name; omit to keep the current one
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New description; omit to keep, send "" to clear
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ClubResponse {
    /// Club unique identifier
    pub id: String,
    /// Club name
    pub name: String,
    /// Id of the university the club belongs to
    pub university_id: String,
    /// University name, when the listing resolves it
    #[oai(skip_serializing_if_is_none)]
    pub university_name: Option<String>,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self {
            id: club.id.to_string(),
            name: club.name,
            university_id: club.university_id.to_string(),
            university_name: None,
            description: club.description,
            created_at: club.created_at,
        }
    }
}

impl From<ClubWithUniversity> for ClubResponse {
    fn from(entry: ClubWithUniversity) -> Self {
        let mut response: Self = entry.club.into();
        response.university_name = entry.university_name;
        response
    }
}

#[derive(Debug, Clone, Object)]
pub struct DeleteClubResponse {
    /// Number of memberships removed along with the club
    pub members_removed: u64,
}
