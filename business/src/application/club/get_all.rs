use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::club::errors::ClubError;
use crate::domain::club::model::ClubWithUniversity;
use crate::domain::club::repository::ClubRepository;
use crate::domain::club::use_cases::get_all::GetAllClubsUseCase;
use crate::domain::logger::Logger;
use crate::domain::university::repository::UniversityRepository;

pub struct GetAllClubsUseCaseImpl {
    pub repository: Arc<dyn ClubRepository>,
    pub university_repository: Arc<dyn UniversityRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllClubsUseCase for GetAllClubsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ClubWithUniversity>, ClubError> {
        self.logger.info("Getting all clubs");

        let clubs = self.repository.get_all().await?;

        // One pass over universities instead of a lookup per club.
        let universities: HashMap<Uuid, String> = self
            .university_repository
            .get_all()
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        let joined = clubs
            .into_iter()
            .map(|club| {
                let university_name = universities.get(&club.university_id).cloned();
                ClubWithUniversity {
                    club,
                    university_name,
                }
            })
            .collect::<Vec<_>>();

        self.logger
            .info(&format!("Retrieved {} clubs", joined.len()));
        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::model::Club;
    use crate::domain::errors::RepositoryError;
    use crate::domain::university::model::University;
    use mockall::mock;

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

    #[tokio::test]
    async fn should_join_university_names() {
        let university_id = Uuid::new_v4();
        let mut club_repo = MockClubRepo::new();
        club_repo.expect_get_all().returning(move || {
            Ok(vec![Club::from_repository(
                Uuid::new_v4(),
                "Chess Club".to_string(),
                university_id,
                None,
                chrono::Utc::now(),
            )])
        });

        let mut university_repo = MockUniversityRepo::new();
        university_repo.expect_get_all().returning(move || {
            Ok(vec![University::from_repository(
                university_id,
                "UTA".to_string(),
                None,
                chrono::Utc::now(),
            )])
        });

        let use_case = GetAllClubsUseCaseImpl {
            repository: Arc::new(club_repo),
            university_repository: Arc::new(university_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let clubs = result.unwrap();
        assert_eq!(clubs.len(), 1);
        assert_eq!(clubs[0].university_name, Some("UTA".to_string()));
    }

    #[tokio::test]
    async fn should_leave_name_absent_when_university_missing() {
        let mut club_repo = MockClubRepo::new();
        club_repo.expect_get_all().returning(|| {
            Ok(vec![Club::from_repository(
                Uuid::new_v4(),
                "Orphan Club".to_string(),
                Uuid::new_v4(),
                None,
                chrono::Utc::now(),
            )])
        });

        let mut university_repo = MockUniversityRepo::new();
        university_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllClubsUseCaseImpl {
            repository: Arc::new(club_repo),
            university_repository: Arc::new(university_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let clubs = result.unwrap();
        assert_eq!(clubs.len(), 1);
        assert!(clubs[0].university_name.is_none());
    }
}
