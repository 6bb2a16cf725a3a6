use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::University;

#[async_trait]
pub trait UniversityRepository: Send + Sync {
    /// Returns all universities sorted by name.
    async fn get_all(&self) -> Result<Vec<University>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<University, RepositoryError>;
    async fn save(&self, university: &University) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
