#[derive(Debug, thiserror::Error)]
pub enum MembershipError {
    #[error("membership.invalid_role")]
    InvalidRole,
    #[error("membership.invalid_status")]
    InvalidStatus,
    #[error("membership.not_found")]
    NotFound,
    #[error("membership.club_not_found")]
    ClubNotFound,
    #[error("membership.person_not_found")]
    PersonNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
