use async_trait::async_trait;

use crate::domain::university::errors::UniversityError;
use crate::domain::university::model::University;

pub struct CreateUniversityParams {
    pub name: String,
    pub domain: Option<String>,
}

#[async_trait]
pub trait CreateUniversityUseCase: Send + Sync {
    async fn execute(&self, params: CreateUniversityParams) -> Result<University, UniversityError>;
}
