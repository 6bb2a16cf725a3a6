use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::university::errors::UniversityError;
use crate::domain::university::repository::UniversityRepository;
use crate::domain::university::use_cases::delete::{DeleteUniversityParams, DeleteUniversityUseCase};

pub struct DeleteUniversityUseCaseImpl {
    pub repository: Arc<dyn UniversityRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteUniversityUseCase for DeleteUniversityUseCaseImpl {
    async fn execute(&self, params: DeleteUniversityParams) -> Result<(), UniversityError> {
        self.logger
            .info(&format!("Deleting university: {}", params.id));

        // Verify it exists. Clubs under the university are intentionally left
        // alone, matching the original behavior.
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UniversityError::NotFound,
                other => UniversityError::Repository(other),
            })?;

        self.repository.delete(params.id).await?;

        self.logger
            .info(&format!("University deleted: {}", params.id));
        Ok(())
    }
}
