use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Membership;

/// Memberships live under their club, so every operation is scoped by
/// `club_id`.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn get_all_for_club(&self, club_id: Uuid) -> Result<Vec<Membership>, RepositoryError>;
    async fn get_by_id(&self, club_id: Uuid, id: Uuid) -> Result<Membership, RepositoryError>;
    async fn save(&self, club_id: Uuid, membership: &Membership) -> Result<(), RepositoryError>;
    async fn delete(&self, club_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
    /// Removes every membership of a club, returning how many were deleted.
    async fn delete_all_for_club(&self, club_id: Uuid) -> Result<u64, RepositoryError>;
}
