use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::person::errors::PersonError;
use crate::domain::person::model::Person;

pub struct UpdatePersonParams {
    pub id: Uuid,
    /// New name; `None` keeps the current one.
    pub name: Option<String>,
    /// New email; `None` keeps the current one, a blank string clears it.
    pub email: Option<String>,
    /// New student id; `None` keeps the current one, a blank string clears it.
    pub student_id: Option<String>,
}

#[async_trait]
pub trait UpdatePersonUseCase: Send + Sync {
    async fn execute(&self, params: UpdatePersonParams) -> Result<Person, PersonError>;
}
