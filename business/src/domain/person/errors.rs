#[derive(Debug, thiserror::Error)]
pub enum PersonError {
    #[error("person.name_empty")]
    NameEmpty,
    #[error("person.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
