use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::text::normalize_optional;
use crate::domain::university::errors::UniversityError;
use crate::domain::university::model::University;
use crate::domain::university::repository::UniversityRepository;
use crate::domain::university::use_cases::update::{UpdateUniversityParams, UpdateUniversityUseCase};

pub struct UpdateUniversityUseCaseImpl {
    pub repository: Arc<dyn UniversityRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateUniversityUseCase for UpdateUniversityUseCaseImpl {
    async fn execute(&self, params: UpdateUniversityParams) -> Result<University, UniversityError> {
        self.logger
            .info(&format!("Updating university: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UniversityError::NotFound,
                other => UniversityError::Repository(other),
            })?;

        let name = match params.name {
            Some(ref n) if n.trim().is_empty() => return Err(UniversityError::NameEmpty),
            Some(n) => n.trim().to_string(),
            None => existing.name,
        };

        let domain = match params.domain {
            Some(d) => normalize_optional(Some(d)),
            None => existing.domain,
        };

        let updated =
            University::from_repository(existing.id, name, domain, existing.created_at);

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("University updated: {}", updated.id));
        Ok(updated)
    }
}
