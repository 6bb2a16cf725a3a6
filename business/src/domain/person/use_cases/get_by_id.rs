use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::person::errors::PersonError;
use crate::domain::person::model::Person;

pub struct GetPersonByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetPersonByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetPersonByIdParams) -> Result<Person, PersonError>;
}
