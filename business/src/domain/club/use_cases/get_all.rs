use async_trait::async_trait;

use crate::domain::club::errors::ClubError;
use crate::domain::club::model::ClubWithUniversity;

#[async_trait]
pub trait GetAllClubsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ClubWithUniversity>, ClubError>;
}
