use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::club::errors::ClubError;
use crate::domain::club::repository::ClubRepository;
use crate::domain::club::use_cases::delete::{DeleteClubParams, DeleteClubUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::membership::repository::MembershipRepository;

pub struct DeleteClubUseCaseImpl {
    pub repository: Arc<dyn ClubRepository>,
    pub membership_repository: Arc<dyn MembershipRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteClubUseCase for DeleteClubUseCaseImpl {
    async fn execute(&self, params: DeleteClubParams) -> Result<u64, ClubError> {
        self.logger.info(&format!("Deleting club: {}", params.id));

        // Verify it exists
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ClubError::NotFound,
                other => ClubError::Repository(other),
            })?;

        // Memberships first, then the club itself.
        let removed = self
            .membership_repository
            .delete_all_for_club(params.id)
            .await?;
        self.repository.delete(params.id).await?;

        self.logger.info(&format!(
            "Club deleted: {} ({} memberships removed)",
            params.id, removed
        ));
        Ok(removed)
    }
}
