use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::university::errors::UniversityError;

pub struct DeleteUniversityParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteUniversityUseCase: Send + Sync {
    async fn execute(&self, params: DeleteUniversityParams) -> Result<(), UniversityError>;
}
