use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::membership::errors::MembershipError;
use crate::domain::membership::model::{MemberRole, MemberStatus, Membership};

pub struct AddMemberParams {
    pub club_id: Uuid,
    pub person_id: Uuid,
    /// Defaults to `MemberRole::Member` when absent.
    pub role: Option<MemberRole>,
    /// Defaults to `MemberStatus::Active` when absent.
    pub status: Option<MemberStatus>,
    pub title: Option<String>,
}

#[async_trait]
pub trait AddMemberUseCase: Send + Sync {
    async fn execute(&self, params: AddMemberParams) -> Result<Membership, MembershipError>;
}
