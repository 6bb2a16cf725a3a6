use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::person::errors::PersonError;

pub struct DeletePersonParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeletePersonUseCase: Send + Sync {
    async fn execute(&self, params: DeletePersonParams) -> Result<(), PersonError>;
}
