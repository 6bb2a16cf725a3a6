#[derive(Debug, thiserror::Error)]
pub enum UniversityError {
    #[error("university.name_empty")]
    NameEmpty,
    #[error("university.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
