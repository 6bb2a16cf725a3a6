use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::membership::errors::MembershipError;
use crate::domain::membership::model::{MemberRole, MemberStatus, Membership};

pub struct UpdateMemberParams {
    pub club_id: Uuid,
    pub id: Uuid,
    /// New role; `None` keeps the current one.
    pub role: Option<MemberRole>,
    /// New status; `None` keeps the current one.
    pub status: Option<MemberStatus>,
    /// New title; `None` keeps the current one, a blank string clears it.
    pub title: Option<String>,
}

#[async_trait]
pub trait UpdateMemberUseCase: Send + Sync {
    async fn execute(&self, params: UpdateMemberParams) -> Result<Membership, MembershipError>;
}
