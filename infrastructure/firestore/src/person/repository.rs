use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::person::model::Person;
use business::domain::person::repository::PersonRepository;

use crate::client::FirestoreClient;

use super::entity::PersonEntity;

const COLLECTION: &str = "people";

pub struct PersonRepositoryFirestore {
    client: FirestoreClient,
}

impl PersonRepositoryFirestore {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    fn doc_path(id: Uuid) -> String {
        format!("{COLLECTION}/{id}")
    }
}

#[async_trait]
impl PersonRepository for PersonRepositoryFirestore {
    async fn get_all(&self) -> Result<Vec<Person>, RepositoryError> {
        let documents = self
            .client
            .list_documents(COLLECTION)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let mut people: Vec<Person> = documents
            .iter()
            .filter_map(PersonEntity::from_document)
            .map(PersonEntity::into_domain)
            .collect();
        people.sort_by_key(|p| p.name.to_lowercase());

        Ok(people)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Person, RepositoryError> {
        let document = self
            .client
            .get_document(&Self::doc_path(id))
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        let entity = PersonEntity::from_document(&document).ok_or(RepositoryError::Persistence)?;
        Ok(entity.into_domain())
    }

    async fn save(&self, person: &Person) -> Result<(), RepositoryError> {
        self.client
            .set_document(&Self::doc_path(person.id), PersonEntity::fields(person))
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
