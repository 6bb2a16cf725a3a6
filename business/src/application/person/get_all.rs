use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::person::errors::PersonError;
use crate::domain::person::model::Person;
use crate::domain::person::repository::PersonRepository;
use crate::domain::person::use_cases::get_all::GetAllPeopleUseCase;

pub struct GetAllPeopleUseCaseImpl {
    pub repository: Arc<dyn PersonRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllPeopleUseCase for GetAllPeopleUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Person>, PersonError> {
        self.logger.info("Getting all people");
        let people = self.repository.get_all().await?;
        self.logger
            .info(&format!("Retrieved {} people", people.len()));
        Ok(people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
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
    async fn should_return_all_people() {
        let mut mock_repo = MockPersonRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![Person::from_repository(
                Uuid::new_v4(),
                "Ada Lovelace".to_string(),
                None,
                None,
                chrono::Utc::now(),
            )])
        });

        let use_case = GetAllPeopleUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockPersonRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllPeopleUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_err());
    }
}
