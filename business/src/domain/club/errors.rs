#[derive(Debug, thiserror::Error)]
pub enum ClubError {
    #[error("club.name_empty")]
    NameEmpty,
    #[error("club.not_found")]
    NotFound,
    #[error("club.university_not_found")]
    UniversityNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
