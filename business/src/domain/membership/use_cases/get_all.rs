use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::membership::errors::MembershipError;
use crate::domain::membership::model::MembershipWithPerson;

pub struct GetClubMembersParams {
    pub club_id: Uuid,
}

#[async_trait]
pub trait GetClubMembersUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetClubMembersParams,
    ) -> Result<Vec<MembershipWithPerson>, MembershipError>;
}
