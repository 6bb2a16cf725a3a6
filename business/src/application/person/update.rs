use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::person::errors::PersonError;
use crate::domain::person::model::Person;
use crate::domain::person::repository::PersonRepository;
use crate::domain::person::use_cases::update::{UpdatePersonParams, UpdatePersonUseCase};
use crate::domain::shared::text::normalize_optional;

pub struct UpdatePersonUseCaseImpl {
    pub repository: Arc<dyn PersonRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePersonUseCase for UpdatePersonUseCaseImpl {
    async fn execute(&self, params: UpdatePersonParams) -> Result<Person, PersonError> {
        self.logger.info(&format!("Updating person: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PersonError::NotFound,
                other => PersonError::Repository(other),
            })?;

        let name = match params.name {
            Some(ref n) if n.trim().is_empty() => return Err(PersonError::NameEmpty),
            Some(n) => n.trim().to_string(),
            None => existing.name,
        };

        let email = match params.email {
            Some(e) => normalize_optional(Some(e)),
            None => existing.email,
        };

        let student_id = match params.student_id {
            Some(s) => normalize_optional(Some(s)),
            None => existing.student_id,
        };

        let updated =
            Person::from_repository(existing.id, name, email, student_id, existing.created_at);

        self.repository.save(&updated).await?;

        self.logger.info(&format!("Person updated: {}", updated.id));
        Ok(updated)
    }
}
