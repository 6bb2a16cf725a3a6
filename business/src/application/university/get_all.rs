use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::university::errors::UniversityError;
use crate::domain::university::model::University;
use crate::domain::university::repository::UniversityRepository;
use crate::domain::university::use_cases::get_all::GetAllUniversitiesUseCase;

pub struct GetAllUniversitiesUseCaseImpl {
    pub repository: Arc<dyn UniversityRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllUniversitiesUseCase for GetAllUniversitiesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<University>, UniversityError> {
        self.logger.info("Getting all universities");
        let universities = self.repository.get_all().await?;
        self.logger
            .info(&format!("Retrieved {} universities", universities.len()));
        Ok(universities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub UniversityRepo {}

        #[async_trait]
        impl UniversityRepository for UniversityRepo {
            async fn get_all(&self) -> Result<Vec<University>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<University, RepositoryError>;
            async fn save(&self, university: &University) -> Result<(), RepositoryError>;
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
    async fn should_return_all_universities() {
        let mut mock_repo = MockUniversityRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                University::from_repository(
                    Uuid::new_v4(),
                    "MIT".to_string(),
                    Some("mit.edu".to_string()),
                    chrono::Utc::now(),
                ),
                University::from_repository(
                    Uuid::new_v4(),
                    "UTA".to_string(),
                    None,
                    chrono::Utc::now(),
                ),
            ])
        });

        let use_case = GetAllUniversitiesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_when_no_universities() {
        let mut mock_repo = MockUniversityRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllUniversitiesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
