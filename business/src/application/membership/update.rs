use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::membership::errors::MembershipError;
use crate::domain::membership::model::Membership;
use crate::domain::membership::repository::MembershipRepository;
use crate::domain::membership::use_cases::update::{UpdateMemberParams, UpdateMemberUseCase};
use crate::domain::shared::text::normalize_optional;

pub struct UpdateMemberUseCaseImpl {
    pub repository: Arc<dyn MembershipRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateMemberUseCase for UpdateMemberUseCaseImpl {
    async fn execute(&self, params: UpdateMemberParams) -> Result<Membership, MembershipError> {
        self.logger.info(&format!(
            "Updating member {} of club {}",
            params.id, params.club_id
        ));

        let existing = self
            .repository
            .get_by_id(params.club_id, params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MembershipError::NotFound,
                other => MembershipError::Repository(other),
            })?;

        let title = match params.title {
            Some(t) => normalize_optional(Some(t)),
            None => existing.title,
        };

        let updated = Membership::from_repository(
            existing.id,
            existing.person_id,
            params.role.unwrap_or(existing.role),
            params.status.unwrap_or(existing.status),
            title,
            existing.created_at,
        );

        self.repository.save(params.club_id, &updated).await?;

        self.logger.info(&format!("Member updated: {}", updated.id));
        Ok(updated)
    }
}
