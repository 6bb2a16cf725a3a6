use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::membership::model::Membership;
use business::domain::membership::repository::MembershipRepository;

use crate::client::FirestoreClient;

use super::entity::MembershipEntity;

pub struct MembershipRepositoryFirestore {
    client: FirestoreClient,
}

impl MembershipRepositoryFirestore {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    fn collection_path(club_id: Uuid) -> String {
        format!("clubs/{club_id}/memberships")
    }

    fn doc_path(club_id: Uuid, id: Uuid) -> String {
        format!("clubs/{club_id}/memberships/{id}")
    }
}

#[async_trait]
impl MembershipRepository for MembershipRepositoryFirestore {
    async fn get_all_for_club(&self, club_id: Uuid) -> Result<Vec<Membership>, RepositoryError> {
        let documents = self
            .client
            .list_documents(&Self::collection_path(club_id))
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(documents
            .iter()
            .filter_map(MembershipEntity::from_document)
            .map(MembershipEntity::into_domain)
            .collect())
    }

    async fn get_by_id(&self, club_id: Uuid, id: Uuid) -> Result<Membership, RepositoryError> {
        let document = self
            .client
            .get_document(&Self::doc_path(club_id, id))
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        let entity =
            MembershipEntity::from_document(&document).ok_or(RepositoryError::Persistence)?;
        Ok(entity.into_domain())
    }

    async fn save(&self, club_id: Uuid, membership: &Membership) -> Result<(), RepositoryError> {
        self.client
            .set_document(
                &Self::doc_path(club_id, membership.id),
                MembershipEntity::fields(membership),
            )
            .await
            .map_err(|_| RepositoryError::DatabaseError)
    }

    async fn delete(&self, club_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        self.client
            .delete_document(&Self::doc_path(club_id, id))
            .await
            .map_err(|_| RepositoryError::DatabaseError)
    }

    async fn delete_all_for_club(&self, club_id: Uuid) -> Result<u64, RepositoryError> {
        let documents = self
            .client
            .list_documents(&Self::collection_path(club_id))
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let mut removed = 0u64;
        for document in &documents {
            let Some(id) = document.doc_id() else {
                continue;
            };
            self.client
                .delete_document(&format!("{}/{id}", Self::collection_path(club_id)))
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;
            removed += 1;
        }

        Ok(removed)
    }
}
