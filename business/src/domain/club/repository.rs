use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Club;

#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Returns all clubs sorted by name.
    async fn get_all(&self) -> Result<Vec<Club>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Club, RepositoryError>;
    async fn save(&self, club: &Club) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
