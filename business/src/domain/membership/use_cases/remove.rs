use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::membership::errors::MembershipError;

pub struct RemoveMemberParams {
    pub club_id: Uuid,
    pub id: Uuid,
}

#[async_trait]
pub trait RemoveMemberUseCase: Send + Sync {
    async fn execute(&self, params: RemoveMemberParams) -> Result<(), MembershipError>;
}
