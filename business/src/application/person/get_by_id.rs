use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::person::errors::PersonError;
use crate::domain::person::model::Person;
use crate::domain::person::repository::PersonRepository;
use crate::domain::person::use_cases::get_by_id::{GetPersonByIdParams, GetPersonByIdUseCase};

pub struct GetPersonByIdUseCaseImpl {
    pub repository: Arc<dyn PersonRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPersonByIdUseCase for GetPersonByIdUseCaseImpl {
    async fn execute(&self, params: GetPersonByIdParams) -> Result<Person, PersonError> {
        self.logger.debug(&format!("Getting person: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PersonError::NotFound,
                other => PersonError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub PersonRepo {}

        #[async_trait]
        impl PersonRepository for PersonRepo {
            async fn get_all(&self) -> Result<Vec<Person>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Person, RepositoryError>;
            async fn save(&self, person: &Person) -> Result<(), RepositoryError>;
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
    async fn should_return_person_when_found() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockPersonRepo::new();
        mock_repo.expect_get_by_id().returning(move |_| {
            Ok(Person::from_repository(
                id,
                "Ada Lovelace".to_string(),
                None,
                None,
                chrono::Utc::now(),
            ))
        });

        let use_case = GetPersonByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetPersonByIdParams { id }).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, id);
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockPersonRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetPersonByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetPersonByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PersonError::NotFound));
    }
}
