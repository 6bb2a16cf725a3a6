use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::club::errors::ClubError;
use crate::domain::club::model::Club;

pub struct GetClubByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetClubByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetClubByIdParams) -> Result<Club, ClubError>;
}
