use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::club::errors::ClubError;
use crate::domain::club::model::Club;
use crate::domain::club::repository::ClubRepository;
use crate::domain::club::use_cases::create::{CreateClubParams, CreateClubUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::university::repository::UniversityRepository;

pub struct CreateClubUseCaseImpl {
    pub repository: Arc<dyn ClubRepository>,
    pub university_repository: Arc<dyn UniversityRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateClubUseCase for CreateClubUseCaseImpl {
    async fn execute(&self, params: CreateClubParams) -> Result<Club, ClubError> {
        self.logger.info(&format!("Creating club: {}", params.name));

        // The owning university must exist before a club can reference it.
        self.university_repository
            .get_by_id(params.university_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ClubError::UniversityNotFound,
                other => ClubError::Repository(other),
            })?;

        let club = Club::new(params.name, params.university_id, params.description)?;
        self.repository.save(&club).await?;

        self.logger.info(&format!("Club created: {}", club.id));
        Ok(club)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::university::model::University;
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

    fn university_repo_with(id: Uuid) -> MockUniversityRepo {
        let mut repo = MockUniversityRepo::new();
        repo.expect_get_by_id().returning(move |_| {
            Ok(University::from_repository(
                id,
                "UTA".to_string(),
                None,
                chrono::Utc::now(),
            ))
        });
        repo
    }

    #[tokio::test]
    async fn should_create_club_when_university_exists() {
        let university_id = Uuid::new_v4();
        let mut mock_repo = MockClubRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateClubUseCaseImpl {
            repository: Arc::new(mock_repo),
            university_repository: Arc::new(university_repo_with(university_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateClubParams {
                name: "Chess Club".to_string(),
                university_id,
                description: None,
            })
            .await;

        assert!(result.is_ok());
        let club = result.unwrap();
        assert_eq!(club.name, "Chess Club");
        assert_eq!(club.university_id, university_id);
    }

    #[tokio::test]
    async fn should_reject_when_university_missing() {
        let mock_repo = MockClubRepo::new();
        let mut university_repo = MockUniversityRepo::new();
        university_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = CreateClubUseCaseImpl {
            repository: Arc::new(mock_repo),
            university_repository: Arc::new(university_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateClubParams {
                name: "Chess Club".to_string(),
                university_id: Uuid::new_v4(),
                description: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClubError::UniversityNotFound));
    }

    #[tokio::test]
    async fn should_reject_when_name_empty() {
        let university_id = Uuid::new_v4();
        let mock_repo = MockClubRepo::new();

        let use_case = CreateClubUseCaseImpl {
            repository: Arc::new(mock_repo),
            university_repository: Arc::new(university_repo_with(university_id)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateClubParams {
                name: " ".to_string(),
                university_id,
                description: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ClubError::NameEmpty));
    }
}
