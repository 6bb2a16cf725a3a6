use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::university::errors::UniversityError;
use crate::domain::university::model::University;

pub struct UpdateUniversityParams {
    pub id: Uuid,
    /// New name; `None` keeps the current one.
    pub name: Option<String>,
    /// New domain; `None` keeps the current one, a blank string clears it.
    pub domain: Option<String>,
}

#[async_trait]
pub trait UpdateUniversityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateUniversityParams) -> Result<University, UniversityError>;
}
