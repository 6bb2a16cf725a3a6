use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::club::repository::ClubRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::membership::errors::MembershipError;
use crate::domain::membership::model::MembershipWithPerson;
use crate::domain::membership::repository::MembershipRepository;
use crate::domain::membership::use_cases::get_all::{GetClubMembersParams, GetClubMembersUseCase};
use crate::domain::person::repository::PersonRepository;

pub struct GetClubMembersUseCaseImpl {
    pub repository: Arc<dyn MembershipRepository>,
    pub club_repository: Arc<dyn ClubRepository>,
    pub person_repository: Arc<dyn PersonRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetClubMembersUseCase for GetClubMembersUseCaseImpl {
    async fn execute(
        &self,
        params: GetClubMembersParams,
    ) -> Result<Vec<MembershipWithPerson>, MembershipError> {
        self.logger
            .info(&format!("Listing members of club {}", params.club_id));

        self.club_repository
            .get_by_id(params.club_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MembershipError::ClubNotFound,
                other => MembershipError::Repository(other),
            })?;

        let memberships = self.repository.get_all_for_club(params.club_id).await?;

        let people: HashMap<Uuid, (String, Option<String>)> = self
            .person_repository
            .get_all()
            .await?
            .into_iter()
            .map(|p| (p.id, (p.name, p.email)))
            .collect();

        let joined = memberships
            .into_iter()
            .map(|membership| {
                let person = people.get(&membership.person_id);
                MembershipWithPerson {
                    person_name: person.map(|(name, _)| name.clone()),
                    person_email: person.and_then(|(_, email)| email.clone()),
                    membership,
                }
            })
            .collect::<Vec<_>>();

        self.logger
            .info(&format!("Retrieved {} members", joined.len()));
        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::model::Club;
    use crate::domain::membership::model::Membership;
    use crate::domain::person::model::Person;
    use mockall::mock;

    mock! {
        pub MembershipRepo {}

        #[async_trait]
        impl MembershipRepository for MembershipRepo {
            async fn get_all_for_club(&self, club_id: Uuid) -> Result<Vec<Membership>, RepositoryError>;
            async fn get_by_id(&self, club_id: Uuid, id: Uuid) -> Result<Membership, RepositoryError>;
            async fn save(&self, club_id: Uuid, membership: &Membership) -> Result<(), RepositoryError>;
            async fn delete(&self, club_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_all_for_club(&self, club_id: Uuid) -> Result<u64, RepositoryError>;
        }
    }

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

    fn club_repo_with(id: Uuid) -> MockClubRepo {
        let mut repo = MockClubRepo::new();
        repo.expect_get_by_id().returning(move |_| {
            Ok(Club::from_repository(
                id,
                "Chess Club".to_string(),
                Uuid::new_v4(),
                None,
                chrono::Utc::now(),
            ))
        });
        repo
    }

    #[tokio::test]
    async fn should_join_person_details() {
        let club_id = Uuid::new_v4();
        let person_id = Uuid::new_v4();

        let mut membership_repo = MockMembershipRepo::new();
        membership_repo
            .expect_get_all_for_club()
            .returning(move |_| Ok(vec![Membership::new(person_id, None, None, None)]));

        let mut person_repo = MockPersonRepo::new();
        person_repo.expect_get_all().returning(move || {
            Ok(vec![Person::from_repository(
                person_id,
                "Ada Lovelace".to_string(),
                Some("ada@uta.edu".to_string()),
                None,
                chrono::Utc::now(),
            )])
        });

        let use_case = GetClubMembersUseCaseImpl {
            repository: Arc::new(membership_repo),
            club_repository: Arc::new(club_repo_with(club_id)),
            person_repository: Arc::new(person_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetClubMembersParams { club_id }).await;

        assert!(result.is_ok());
        let members = result.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].person_name, Some("Ada Lovelace".to_string()));
        assert_eq!(members[0].person_email, Some("ada@uta.edu".to_string()));
    }

    #[tokio::test]
    async fn should_leave_person_absent_when_deleted() {
        let club_id = Uuid::new_v4();

        let mut membership_repo = MockMembershipRepo::new();
        membership_repo
            .expect_get_all_for_club()
            .returning(|_| Ok(vec![Membership::new(Uuid::new_v4(), None, None, None)]));

        let mut person_repo = MockPersonRepo::new();
        person_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetClubMembersUseCaseImpl {
            repository: Arc::new(membership_repo),
            club_repository: Arc::new(club_repo_with(club_id)),
            person_repository: Arc::new(person_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetClubMembersParams { club_id }).await;

        assert!(result.is_ok());
        let members = result.unwrap();
        assert_eq!(members.len(), 1);
        assert!(members[0].person_name.is_none());
    }

    #[tokio::test]
    async fn should_reject_when_club_missing() {
        let mut club_repo = MockClubRepo::new();
        club_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetClubMembersUseCaseImpl {
            repository: Arc::new(MockMembershipRepo::new()),
            club_repository: Arc::new(club_repo),
            person_repository: Arc::new(MockPersonRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetClubMembersParams {
                club_id: Uuid::new_v4(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            MembershipError::ClubNotFound
        ));
    }
}
