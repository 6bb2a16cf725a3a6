use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::university::use_cases::create::{
    CreateUniversityParams, CreateUniversityUseCase,
};
use business::domain::university::use_cases::delete::{
    DeleteUniversityParams, DeleteUniversityUseCase,
};
use business::domain::university::use_cases::get_all::GetAllUniversitiesUseCase;
use business::domain::university::use_cases::get_by_id::{
    GetUniversityByIdParams, GetUniversityByIdUseCase,
};
use business::domain::university::use_cases::update::{
    UpdateUniversityParams, UpdateUniversityUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::university::dto::{
    CreateUniversityRequest, UniversityResponse, UpdateUniversityRequest,
};

pub struct UniversityApi {
    create_use_case: Arc<dyn CreateUniversityUseCase>,
    get_all_use_case: Arc<dyn GetAllUniversitiesUseCase>,
    get_by_id_use_case: Arc<dyn GetUniversityByIdUseCase>,
    update_use_case: Arc<dyn UpdateUniversityUseCase>,
    delete_use_case: Arc<dyn DeleteUniversityUseCase>,
}

impl UniversityApi {
    pub fn new(
        create_use_case: Arc<dyn CreateUniversityUseCase>,
        get_all_use_case: Arc<dyn GetAllUniversitiesUseCase>,
        get_by_id_use_case: Arc<dyn GetUniversityByIdUseCase>,
        update_use_case: Arc<dyn UpdateUniversityUseCase>,
        delete_use_case: Arc<dyn DeleteUniversityUseCase>,
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

/// University management API
///
/// Endpoints for managing universities.
#[OpenApi]
impl UniversityApi {
    /// List all universities
    ///
    /// Returns all universities ordered by name.
    #[oai(path = "/universities", method = "get", tag = "ApiTags::Universities")]
    async fn get_all(&self) -> GetAllUniversitiesResponse {
        match self.get_all_use_case.execute().await {
            Ok(universities) => {
                let responses: Vec<UniversityResponse> =
                    universities.into_iter().map(|u| u.into()).collect();
                GetAllUniversitiesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllUniversitiesResponse::InternalError(json)
            }
        }
    }

    /// Create a university
    #[oai(path = "/universities", method = "post", tag = "ApiTags::Universities")]
    async fn create(&self, body: Json<CreateUniversityRequest>) -> CreateUniversityResponse {
        let params = CreateUniversityParams {
            name: body.0.name,
            domain: body.0.domain,
        };

        match self.create_use_case.execute(params).await {
            Ok(university) => CreateUniversityResponse::Created(Json(university.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateUniversityResponse::BadRequest(json),
                    _ => CreateUniversityResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a university by id
    #[oai(
        path = "/universities/:id",
        method = "get",
        tag = "ApiTags::Universities"
    )]
    async fn get_by_id(&self, id: Path<String>) -> GetUniversityResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetUniversityResponse::BadRequest(ErrorResponse::validation(
                    "university.invalid_id",
                ));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetUniversityByIdParams { id: uuid })
            .await
        {
            Ok(university) => GetUniversityResponse::Ok(Json(university.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetUniversityResponse::NotFound(json),
                    _ => GetUniversityResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a university
    ///
    /// Omitted fields keep their current value; an empty string clears the
    /// domain.
    #[oai(
        path = "/universities/:id",
        method = "put",
        tag = "ApiTags::Universities"
    )]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<UpdateUniversityRequest>,
    ) -> UpdateUniversityResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateUniversityResponse::BadRequest(ErrorResponse::validation(
                    "university.invalid_id",
                ));
            }
        };

        let params = UpdateUniversityParams {
            id: uuid,
            name: body.0.name,
            domain: body.0.domain,
        };

        match self.update_use_case.execute(params).await {
            Ok(university) => UpdateUniversityResponse::Ok(Json(university.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateUniversityResponse::BadRequest(json),
                    404 => UpdateUniversityResponse::NotFound(json),
                    _ => UpdateUniversityResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a university
    #[oai(
        path = "/universities/:id",
        method = "delete",
        tag = "ApiTags::Universities"
    )]
    async fn delete(&self, id: Path<String>) -> DeleteUniversityResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteUniversityResponse::BadRequest(ErrorResponse::validation(
                    "university.invalid_id",
                ));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteUniversityParams { id: uuid })
            .await
        {
            Ok(()) => DeleteUniversityResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteUniversityResponse::NotFound(json),
                    _ => DeleteUniversityResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllUniversitiesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UniversityResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateUniversityResponse {
    #[oai(status = 201)]
    Created(Json<UniversityResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUniversityResponse {
    #[oai(status = 200)]
    Ok(Json<UniversityResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateUniversityResponse {
    #[oai(status = 200)]
    Ok(Json<UniversityResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteUniversityResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
