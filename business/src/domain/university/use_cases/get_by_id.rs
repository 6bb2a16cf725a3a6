use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::university::errors::UniversityError;
use crate::domain::university::model::University;

pub struct GetUniversityByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetUniversityByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetUniversityByIdParams)
    -> Result<University, UniversityError>;
}
