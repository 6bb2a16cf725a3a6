use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::person::use_cases::create::{CreatePersonParams, CreatePersonUseCase};
use business::domain::person::use_cases::delete::{DeletePersonParams, DeletePersonUseCase};
use business::domain::person::use_cases::get_all::GetAllPeopleUseCase;
use business::domain::person::use_cases::get_by_id::{GetPersonByIdParams, GetPersonByIdUseCase};
use business::domain::person::use_cases::update::{UpdatePersonParams, UpdatePersonUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::person::dto::{CreatePersonRequest, PersonResponse, UpdatePersonRequest};
use crate::api::tags::ApiTags;

pub struct PersonApi {
    create_use_case: Arc<dyn CreatePersonUseCase>,
    get_all_use_case: Arc<dyn GetAllPeopleUseCase>,
    get_by_id_use_case: Arc<dyn GetPersonByIdUseCase>,
    update_use_case: Arc<dyn UpdatePersonUseCase>,
    delete_use_case: Arc<dyn DeletePersonUseCase>,
}

impl PersonApi {
    pub fn new(
        create_use_case: Arc<dyn CreatePersonUseCase>,
        get_all_use_case: Arc<dyn GetAllPeopleUseCase>,
        get_by_id_use_case: Arc<dyn GetPersonByIdUseCase>,
        update_use_case: Arc<dyn UpdatePersonUseCase>,
        delete_use_case: Arc<dyn DeletePersonUseCase>,
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

/// People management API
///
/// Endpoints for managing the people directory.
#[OpenApi]
impl PersonApi {
    /// List all people
    ///
    /// Returns all people ordered by name.
    #[oai(path = "/people", method = "get", tag = "ApiTags::People")]
    async fn get_all(&self) -> GetAllPeopleResponse {
        match self.get_all_use_case.execute().await {
            Ok(people) => {
                let responses: Vec<PersonResponse> = people.into_iter().map(|p| p.into()).collect();
                GetAllPeopleResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllPeopleResponse::InternalError(json)
            }
        }
    }

    /// Create a person
    #[oai(path = "/people", method = "post", tag = "ApiTags::People")]
    async fn create(&self, body: Json<CreatePersonRequest>) -> CreatePersonResponse {
        let params = CreatePersonParams {
            name: body.0.name,
            email: body.0.email,
            student_id: body.0.student_id,
        };

        match self.create_use_case.execute(params).await {
            Ok(person) => CreatePersonResponse::Created(Json(person.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreatePersonResponse::BadRequest(json),
                    _ => CreatePersonResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a person by id
    #[oai(path = "/people/:id", method = "get", tag = "ApiTags::People")]
    async fn get_by_id(&self, id: Path<String>) -> GetPersonResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetPersonResponse::BadRequest(ErrorResponse::validation(
                    "person.invalid_id",
                ));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetPersonByIdParams { id: uuid })
            .await
        {
            Ok(person) => GetPersonResponse::Ok(Json(person.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetPersonResponse::NotFound(json),
                    _ => GetPersonResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a person
    ///
    /// Omitted fields keep their current value; an empty string clears the
    /// email or student id.
    #[oai(path = "/people/:id", method = "put", tag = "ApiTags::People")]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<UpdatePersonRequest>,
    ) -> UpdatePersonResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdatePersonResponse::BadRequest(ErrorResponse::validation(
                    "person.invalid_id",
                ));
            }
        };

        let params = UpdatePersonParams {
            id: uuid,
            name: body.0.name,
            email: body.0.email,
            student_id: body.0.student_id,
        };

        match self.update_use_case.execute(params).await {
            Ok(person) => UpdatePersonResponse::Ok(Json(person.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdatePersonResponse::BadRequest(json),
                    404 => UpdatePersonResponse::NotFound(json),
                    _ => UpdatePersonResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a person
    ///
    /// Memberships referencing the person are kept; rosters show them
    /// without a resolved name.
    #[oai(path = "/people/:id", method = "delete", tag = "ApiTags::People")]
    async fn delete(&self, id: Path<String>) -> DeletePersonResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeletePersonResponse::BadRequest(ErrorResponse::validation(
                    "person.invalid_id",
                ));
            }
        };

        match self
            .delete_use_case
            .execute(DeletePersonParams { id: uuid })
            .await
        {
            Ok(()) => DeletePersonResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeletePersonResponse::NotFound(json),
                    _ => DeletePersonResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllPeopleResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PersonResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreatePersonResponse {
    #[oai(status = 201)]
    Created(Json<PersonResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPersonResponse {
    #[oai(status = 200)]
    Ok(Json<PersonResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdatePersonResponse {
    #[oai(status = 200)]
    Ok(Json<PersonResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeletePersonResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
