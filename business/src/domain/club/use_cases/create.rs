use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::club::errors::ClubError;
use crate::domain::club::model::Club;

pub struct CreateClubParams {
    pub name: String,
    pub university_id: Uuid,
    pub description: Option<String>,
}

#[async_trait]
pub trait CreateClubUseCase: Send + Sync {
    async fn execute(&self, params: CreateClubParams) -> Result<Club, ClubError>;
}
