use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::club::use_cases::create::{CreateClubParams, CreateClubUseCase};
use business::domain::club::use_cases::delete::{DeleteClubParams, DeleteClubUseCase};
use business::domain::club::use_cases::get_all::GetAllClubsUseCase;
use business::domain::club::use_cases::get_by_id::{GetClubByIdParams, GetClubByIdUseCase};
use business::domain::club::use_cases::update::{UpdateClubParams, UpdateClubUseCase};

use crate::api::club::dto::{
    ClubResponse, CreateClubRequest, DeleteClubResponse, UpdateClubRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ClubApi {
    create_use_case: Arc<dyn CreateClubUseCase>,
    get_all_use_case: Arc<dyn GetAllClubsUseCase>,
    get_by_id_use_case: Arc<dyn GetClubByIdUseCase>,
    update_use_case: Arc<dyn UpdateClubUseCase>,
    delete_use_case: Arc<dyn DeleteClubUseCase>,
}

impl ClubApi {
    pub fn new(
        create_use_case: Arc<dyn CreateClubUseCase>,
        get_all_use_case: Arc<dyn GetAllClubsUseCase>,
        get_by_id_use_case: Arc<dyn GetClubByIdUseCase>,
        update_use_case: Arc<dyn UpdateClubUseCase>,
        delete_use_case: Arc<dyn DeleteClubUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Club management API
///
/// Endpoints for managing student clubs.
#[OpenApi]
impl ClubApi {
    /// List all clubs
    ///
    /// Returns all clubs ordered by name, each with its university name resolved
    /// when the university still exists.
    #[oai(path = "/clubs", method = "get", tag = "ApiTags::Clubs")]
    async fn get_all(&self) -> GetAllClubsResponse {
        match self.get_all_use_case.execute().await {
            Ok(clubs) => {
                let responses: Vec<ClubResponse> = clubs.into_iter().map(|c| c.into()).collect();
                GetAllClubsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllClubsResponse::InternalError(json)
            }
        }
    }

    /// Create a club
    ///
    /// The referenced university must exist.
    #[oai(path = "/clubs", method = "post", tag = "ApiTags::Clubs")]
    async fn create(&self, body: Json<CreateClubRequest>) -> CreateClubApiResponse {
        let university_id = match Uuid::parse_str(&body.0.university_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return CreateClubApiResponse::BadRequest(ErrorResponse::validation(
                    "club.invalid_university_id",
                ));
            }
        };

        let params = CreateClubParams {
            name: body.0.name,
            university_id,
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(club) => CreateClubApiResponse::Created(Json(club.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateClubApiResponse::BadRequest(json),
                    404 => CreateClubApiResponse::NotFound(json),
                    _ => CreateClubApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a club by id
    #[oai(path = "/clubs/:id", method = "get", tag = "ApiTags::Clubs")]
    async fn get_by_id(&self, id: Path<String>) -> GetClubResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetClubResponse::BadRequest(ErrorResponse::validation("club.invalid_id"));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetClubByIdParams { id: uuid })
            .await
        {
            Ok(club) => GetClubResponse::Ok(Json(club.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetClubResponse::NotFound(json),
                    _ => GetClubResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a club
    ///
    /// Omitted fields keep their current value; an empty string clears the
    /// description. The club's university cannot be changed.
    #[oai(path = "/clubs/:id", method = "put", tag = "ApiTags::Clubs")]
    async fn update(&self, id: Path<String>, body: Json<UpdateClubRequest>) -> UpdateClubResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateClubResponse::BadRequest(ErrorResponse::validation(
                    "club.invalid_id",
                ));
            }
        };

        let params = UpdateClubParams {
            id: uuid,
            name: body.0.name,
            description: body.0.description,
        };

        match self.update_use_case.execute(params).await {
            Ok(club) => UpdateClubResponse::Ok(Json(club.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateClubResponse::BadRequest(json),
                    404 => UpdateClubResponse::NotFound(json),
                    _ => UpdateClubResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a club
    ///
    /// Removes the club and every membership under it, reporting how many
    /// memberships were removed.
    #[oai(path = "/clubs/:id", method = "delete", tag = "ApiTags::Clubs")]
    async fn delete(&self, id: Path<String>) -> DeleteClubApiResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteClubApiResponse::BadRequest(ErrorResponse::validation(
                    "club.invalid_id",
                ));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteClubParams { id: uuid })
            .await
        {
            Ok(members_removed) => {
                DeleteClubApiResponse::Ok(Json(DeleteClubResponse { members_removed }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteClubApiResponse::NotFound(json),
                    _ => DeleteClubApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllClubsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ClubResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateClubApiResponse {
    #[oai(status = 201)]
    Created(Json<ClubResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetClubResponse {
    #[oai(status = 200)]
    Ok(Json<ClubResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateClubResponse {
    #[oai(status = 200)]
    Ok(Json<ClubResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteClubApiResponse {
    #[oai(status = 200)]
    Ok(Json<DeleteClubResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
