use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Person;

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Returns all people sorted by name.
    async fn get_all(&self) -> Result<Vec<Person>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Person, RepositoryError>;
    async fn save(&self, person: &Person) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
