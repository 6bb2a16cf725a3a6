use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::university::model::University;
use business::domain::university::repository::UniversityRepository;

use crate::client::FirestoreClient;

use super::entity::UniversityEntity;

const COLLECTION: &str = "universities";

pub struct UniversityRepositoryFirestore {
    client: FirestoreClient,
}

impl UniversityRepositoryFirestore {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    fn doc_path(id: Uuid) -> String {
        format!("{COLLECTION}/{id}")
    }
}

#[async_trait]
impl UniversityRepository for UniversityRepositoryFirestore {
    async fn get_all(&self) -> Result<Vec<University>, RepositoryError> {
        let documents = self
            .client
            .list_documents(COLLECTION)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let mut universities: Vec<University> = documents
            .iter()
            .filter_map(UniversityEntity::from_document)
            .map(UniversityEntity::into_domain)
            .collect();
        universities.sort_by_key(|u| u.name.to_lowercase());

        Ok(universities)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<University, RepositoryError> {
        let document = self
            .client
            .get_document(&Self::doc_path(id))
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        let entity =
            UniversityEntity::from_document(&document).ok_or(RepositoryError::Persistence)?;
        Ok(entity.into_domain())
    }

    async fn save(&self, university: &University) -> Result<(), RepositoryError> {
        self.client
            .set_document(
                &Self::doc_path(university.id),
                UniversityEntity::fields(university),
            )
            .await
            .map_err(|_| RepositoryError::DatabaseError)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.client
            .delete_document(&Self::doc_path(id))
            .await
            .map_err(|_| RepositoryError::DatabaseError)
    }
}
