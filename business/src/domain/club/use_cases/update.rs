use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::club::errors::ClubError;
use crate::domain::club::model::Club;

pub struct UpdateClubParams {
    pub id: Uuid,
    /// New name; `None` keeps the current one.
    pub name: Option<String>,
    /// New description; `None` keeps the current one, a blank string clears it.
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateClubUseCase: Send + Sync {
    async fn execute(&self, params: UpdateClubParams) -> Result<Club, ClubError>;
}
