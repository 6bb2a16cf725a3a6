use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::club::errors::ClubError;

pub struct DeleteClubParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteClubUseCase: Send + Sync {
    /// Deletes a club and all of its memberships. Returns the number of
    /// memberships removed alongside the club.
    async fn execute(&self, params: DeleteClubParams) -> Result<u64, ClubError>;
}
