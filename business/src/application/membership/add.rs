use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::club::repository::ClubRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::membership::errors::MembershipError;
use crate::domain::membership::model::Membership;
use crate::domain::membership::repository::MembershipRepository;
use crate::domain::membership::use_cases::add::{AddMemberParams, AddMemberUseCase};
use crate::domain::person::repository::PersonRepository;

pub struct AddMemberUseCaseImpl {
    pub repository: Arc<dyn MembershipRepository>,
    pub club_repository: Arc<dyn ClubRepository>,
    pub person_repository: Arc<dyn PersonRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddMemberUseCase for AddMemberUseCaseImpl {
    async fn execute(&self, params: AddMemberParams) -> Result<Membership, MembershipError> {
        self.logger.info(&format!(
            "Adding person {} to club {}",
            params.person_id, params.club_id
        ));

        self.club_repository
            .get_by_id(params.club_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MembershipError::ClubNotFound,
                other => MembershipError::Repository(other),
            })?;

        self.person_repository
            .get_by_id(params.person_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MembershipError::PersonNotFound,
                other => MembershipError::Repository(other),
            })?;

        let membership =
            Membership::new(params.person_id, params.role, params.status, params.title);
        self.repository.save(params.club_id, &membership).await?;

        self.logger
            .info(&format!("Member added: {}", membership.id));
        Ok(membership)
    }
}
