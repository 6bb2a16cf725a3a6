use async_trait::async_trait;

use crate::domain::university::errors::UniversityError;
use crate::domain::university::model::University;

#[async_trait]
pub trait GetAllUniversitiesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<University>, UniversityError>;
}
