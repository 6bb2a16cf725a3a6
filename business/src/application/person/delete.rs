use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::person::errors::PersonError;
use crate::domain::person::repository::PersonRepository;
use crate::domain::person::use_cases::delete::{DeletePersonParams, DeletePersonUseCase};

pub struct DeletePersonUseCaseImpl {
    pub repository: Arc<dyn PersonRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeletePersonUseCase for DeletePersonUseCaseImpl {
    async fn execute(&self, params: DeletePersonParams) -> Result<(), PersonError> {
        self.logger.info(&format!("Deleting person: {}", params.id));

        // Verify it exists
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PersonError::NotFound,
                other => PersonError::Repository(other),
            })?;

        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Person deleted: {}", params.id));
        Ok(())
    }
}
