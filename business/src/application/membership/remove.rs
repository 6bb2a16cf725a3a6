use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::membership::errors::MembershipError;
use crate::domain::membership::repository::MembershipRepository;
use crate::domain::membership::use_cases::remove::{RemoveMemberParams, RemoveMemberUseCase};

pub struct RemoveMemberUseCaseImpl {
    pub repository: Arc<dyn MembershipRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveMemberUseCase for RemoveMemberUseCaseImpl {
    async fn execute(&self, params: RemoveMemberParams) -> Result<(), MembershipError> {
        self.logger.info(&format!(
            "Removing member {} from club {}",
            params.id, params.club_id
        ));

        // Verify it exists
        self.repository
            .get_by_id(params.club_id, params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MembershipError::NotFound,
                other => MembershipError::Repository(other),
            })?;

        self.repository.delete(params.club_id, params.id).await?;

        self.logger.info(&format!("Member removed: {}", params.id));
        Ok(())
    }
}
