use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::club::errors::ClubError;
use crate::domain::club::model::Club;
use crate::domain::club::repository::ClubRepository;
use crate::domain::club::use_cases::update::{UpdateClubParams, UpdateClubUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::text::normalize_optional;

pub struct UpdateClubUseCaseImpl {
    pub repository: Arc<dyn ClubRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateClubUseCase for UpdateClubUseCaseImpl {
    async fn execute(&self, params: UpdateClubParams) -> Result<Club, ClubError> {
        self.logger.info(&format!("Updating club: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ClubError::NotFound,
                other => ClubError::Repository(other),
            })?;

        let name = match params.name {
            Some(ref n) if n.trim().is_empty() => return Err(ClubError::NameEmpty),
            Some(n) => n.trim().to_string(),
            None => existing.name,
        };

        let description = match params.description {
            Some(d) => normalize_optional(Some(d)),
            None => existing.description,
        };

        let updated = Club::from_repository(
            existing.id,
            name,
            existing.university_id,
            description,
            existing.created_at,
        );

        self.repository.save(&updated).await?;

        self.logger.info(&format!("Club updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ClubRepo {}

        #[async_trait]
        impl ClubRepository for ClubRepo {
            async fn get_all(&self) -> Result<Vec<Club>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Club, RepositoryError>;
            async fn save(&self, club: &Club) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn existing_club(id: Uuid) -> Club {
        Club::from_repository(
            id,
            "Chess Club".to_string(),
            Uuid::new_v4(),
            Some("Weekly blitz nights".to_string()),
            chrono::Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_update_name_and_keep_description() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockClubRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing_club(id)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateClubUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateClubParams {
                id,
                name: Some("Chess & Go Club".to_string()),
                description: None,
            })
            .await;

        assert!(result.is_ok());
        let updated = result.unwrap();
        assert_eq!(updated.name, "Chess & Go Club");
        assert_eq!(
            updated.description,
            Some("Weekly blitz nights".to_string())
        );
    }

    #[tokio::test]
    async fn should_reject_when_name_empty() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockClubRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing_club(id)));

        let use_case = UpdateClubUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateClubParams {
                id,
                name: Some("".to_string()),
                description: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClubError::NameEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockClubRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateClubUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateClubParams {
                id: Uuid::new_v4(),
                name: None,
                description: Some("New description".to_string()),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClubError::NotFound));
    }
}
