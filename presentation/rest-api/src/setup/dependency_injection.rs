use std::sync::Arc;

use logger::TracingLogger;

use firestore::client::FirestoreClient;
use firestore::club::repository::ClubRepositoryFirestore;
use firestore::membership::repository::MembershipRepositoryFirestore;
use firestore::person::repository::PersonRepositoryFirestore;
use firestore::university::repository::UniversityRepositoryFirestore;

use business::application::club::create::CreateClubUseCaseImpl;
use business::application::club::delete::DeleteClubUseCaseImpl;
use business::application::club::get_all::GetAllClubsUseCaseImpl;
use business::application::club::get_by_id::GetClubByIdUseCaseImpl;
use business::application::club::update::UpdateClubUseCaseImpl;
use business::application::membership::add::AddMemberUseCaseImpl;
use business::application::membership::get_all::GetClubMembersUseCaseImpl;
use business::application::membership::remove::RemoveMemberUseCaseImpl;
use business::application::membership::update::UpdateMemberUseCaseImpl;
use business::application::person::create::CreatePersonUseCaseImpl;
use business::application::person::delete::DeletePersonUseCaseImpl;
use business::application::person::get_all::GetAllPeopleUseCaseImpl;
use business::application::person::get_by_id::GetPersonByIdUseCaseImpl;
use business::application::person::update::UpdatePersonUseCaseImpl;
use business::application::university::create::CreateUniversityUseCaseImpl;
use business::application::university::delete::DeleteUniversityUseCaseImpl;
use business::application::university::get_all::GetAllUniversitiesUseCaseImpl;
use business::application::university::get_by_id::GetUniversityByIdUseCaseImpl;
use business::application::university::update::UpdateUniversityUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub university_api: crate::api::university::routes::UniversityApi,
    pub club_api: crate::api::club::routes::ClubApi,
    pub person_api: crate::api::person::routes::PersonApi,
    pub member_api: crate::api::membership::routes::MemberApi,
}

impl DependencyContainer {
    pub fn new(client: FirestoreClient) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let university_repository = Arc::new(UniversityRepositoryFirestore::new(client.clone()));
        let club_repository = Arc::new(ClubRepositoryFirestore::new(client.clone()));
        let person_repository = Arc::new(PersonRepositoryFirestore::new(client.clone()));
        let membership_repository = Arc::new(MembershipRepositoryFirestore::new(client));

        // University use cases
        let create_university_use_case = Arc::new(CreateUniversityUseCaseImpl {
            repository: university_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_universities_use_case = Arc::new(GetAllUniversitiesUseCaseImpl {
            repository: university_repository.clone(),
            logger: logger.clone(),
        });
        let get_university_by_id_use_case = Arc::new(GetUniversityByIdUseCaseImpl {
            repository: university_repository.clone(),
            logger: logger.clone(),
        });
        let update_university_use_case = Arc::new(UpdateUniversityUseCaseImpl {
            repository: university_repository.clone(),
            logger: logger.clone(),
        });
        let delete_university_use_case = Arc::new(DeleteUniversityUseCaseImpl {
            repository: university_repository.clone(),
            logger: logger.clone(),
        });

        // Club use cases
        let create_club_use_case = Arc::new(CreateClubUseCaseImpl {
            repository: club_repository.clone(),
            university_repository: university_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_clubs_use_case = Arc::new(GetAllClubsUseCaseImpl {
            repository: club_repository.clone(),
            university_repository: university_repository.clone(),
            logger: logger.clone(),
        });
        let get_club_by_id_use_case = Arc::new(GetClubByIdUseCaseImpl {
            repository: club_repository.clone(),
            logger: logger.clone(),
        });
        let update_club_use_case = Arc::new(UpdateClubUseCaseImpl {
            repository: club_repository.clone(),
            logger: logger.clone(),
        });
        let delete_club_use_case = Arc::new(DeleteClubUseCaseImpl {
            repository: club_repository.clone(),
            membership_repository: membership_repository.clone(),
            logger: logger.clone(),
        });

        // Person use cases
        let create_person_use_case = Arc::new(CreatePersonUseCaseImpl {
            repository: person_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_people_use_case = Arc::new(GetAllPeopleUseCaseImpl {
            repository: person_repository.clone(),
            logger: logger.clone(),
        });
        let get_person_by_id_use_case = Arc::new(GetPersonByIdUseCaseImpl {
            repository: person_repository.clone(),
            logger: logger.clone(),
        });
        let update_person_use_case = Arc::new(UpdatePersonUseCaseImpl {
            repository: person_repository.clone(),
            logger: logger.clone(),
        });
        let delete_person_use_case = Arc::new(DeletePersonUseCaseImpl {
            repository: person_repository.clone(),
            logger: logger.clone(),
        });

        // Membership use cases
        let add_member_use_case = Arc::new(AddMemberUseCaseImpl {
            repository: membership_repository.clone(),
            club_repository: club_repository.clone(),
            person_repository: person_repository.clone(),
            logger: logger.clone(),
        });
        let get_club_members_use_case = Arc::new(GetClubMembersUseCaseImpl {
            repository: membership_repository.clone(),
            club_repository,
            person_repository,
            logger: logger.clone(),
        });
        let update_member_use_case = Arc::new(UpdateMemberUseCaseImpl {
            repository: membership_repository.clone(),
            logger: logger.clone(),
        });
        let remove_member_use_case = Arc::new(RemoveMemberUseCaseImpl {
            repository: membership_repository,
            logger,
        });

        let university_api = crate::api::university::routes::UniversityApi::new(
            create_university_use_case,
            get_all_universities_use_case,
            get_university_by_id_use_case,
            update_university_use_case,
            delete_university_use_case,
        );

        let club_api = crate::api::club::routes::ClubApi::new(
            create_club_use_case,
            get_all_clubs_use_case,
            get_club_by_id_use_case,
            update_club_use_case,
            delete_club_use_case,
        );

        let person_api = crate::api::person::routes::PersonApi::new(
            create_person_use_case,
            get_all_people_use_case,
            get_person_by_id_use_case,
            update_person_use_case,
            delete_person_use_case,
        );

        let member_api = crate::api::membership::routes::MemberApi::new(
            add_member_use_case,
            get_club_members_use_case,
            update_member_use_case,
            remove_member_use_case,
        );

        Self {
            health_api,
            university_api,
            club_api,
            person_api,
            member_api,
        }
    }
}
