use async_trait::async_trait;

use crate::domain::person::errors::PersonError;
use crate::domain::person::model::Person;

pub struct CreatePersonParams {
    pub name: String,
    pub email: Option<String>,
    pub student_id: Option<String>,
}

#[async_trait]
pub trait CreatePersonUseCase: Send + Sync {
    async fn execute(&self, params: CreatePersonParams) -> Result<Person, PersonError>;
}
