use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::club::errors::ClubError;
use crate::domain::club::model::Club;
use crate::domain::club::repository::ClubRepository;
use crate::domain::club::use_cases::get_by_id::{GetClubByIdParams, GetClubByIdUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetClubByIdUseCaseImpl {
    pub repository: Arc<dyn ClubRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetClubByIdUseCase for GetClubByIdUseCaseImpl {
    async fn execute(&self, params: GetClubByIdParams) -> Result<Club, ClubError> {
        self.logger.debug(&format!("Getting club: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ClubError::NotFound,
                other => ClubError::Repository(other),
            })
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

    #[tokio::test]
    async fn should_return_club_when_found() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockClubRepo::new();
        mock_repo.expect_get_by_id().returning(move |_| {
            Ok(Club::from_repository(
                id,
                "Chess Club".to_string(),
                Uuid::new_v4(),
                None,
                chrono::Utc::now(),
            ))
        });

        let use_case = GetClubByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetClubByIdParams { id }).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, id);
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockClubRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetClubByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetClubByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClubError::NotFound));
    }
}
