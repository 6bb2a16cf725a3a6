use async_trait::async_trait;

use crate::domain::person::errors::PersonError;
use crate::domain::person::model::Person;

#[async_trait]
pub trait GetAllPeopleUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Person>, PersonError>;
}
