use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::university::errors::UniversityError;
use crate::domain::university::model::University;
use crate::domain::university::repository::UniversityRepository;
use crate::domain::university::use_cases::get_by_id::{
    GetUniversityByIdParams, GetUniversityByIdUseCase,
};

pub struct GetUniversityByIdUseCaseImpl {
    pub repository: Arc<dyn UniversityRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUniversityByIdUseCase for GetUniversityByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetUniversityByIdParams,
    ) -> Result<University, UniversityError> {
        self.logger
            .debug(&format!("Getting university: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UniversityError::NotFound,
                other => UniversityError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    async fn should_return_university_when_found() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockUniversityRepo::new();
        mock_repo.expect_get_by_id().returning(move |_| {
            Ok(University::from_repository(
                id,
                "MIT".to_string(),
                None,
                chrono::Utc::now(),
            ))
        });

        let use_case = GetUniversityByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetUniversityByIdParams { id }).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, id);
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockUniversityRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetUniversityByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetUniversityByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UniversityError::NotFound));
    }
}
