use async_trait::async_trait;
use uuid::Uuid;

use business::domain::club::model::Club;
use business::domain::club::repository::ClubRepository;
use business::domain::errors::RepositoryError;

use crate::client::FirestoreClient;

use super::entity::ClubEntity;

const COLLECTION: &str = "clubs";

pub struct ClubRepositoryFirestore {
    client: FirestoreClient,
}

impl ClubRepositoryFirestore {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    fn doc_path(id: Uuid) -> String {
        format!("{COLLECTION}/{id}")
    }
}

#[async_trait]
impl ClubRepository for ClubRepositoryFirestore {
    async fn get_all(&self) -> Result<Vec<Club>, RepositoryError> {
        let documents = self
            .client
            .list_documents(COLLECTION)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let mut clubs: Vec<Club> = documents
            .iter()
            .filter_map(ClubEntity::from_document)
            .map(ClubEntity::into_domain)
            .collect();
        clubs.sort_by_key(|c| c.name.to_lowercase());

        Ok(clubs)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Club, RepositoryError> {
        let document = self
            .client
            .get_document(&Self::doc_path(id))
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        let entity = ClubEntity::from_document(&document).ok_or(RepositoryError::Persistence)?;
        Ok(entity.into_domain())
    }

    async fn save(&self, club: &Club) -> Result<(), RepositoryError> {
        self.client
            .set_document(&Self::doc_path(club.id), ClubEntity::fields(club))
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
