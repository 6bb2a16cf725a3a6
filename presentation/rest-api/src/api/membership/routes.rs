use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::membership::model::{MemberRole, MemberStatus};
use business::domain::membership::use_cases::add::{AddMemberParams, AddMemberUseCase};
use business::domain::membership::use_cases::get_all::{
    GetClubMembersParams, GetClubMembersUseCase,
};
use business::domain::membership::use_cases::remove::{RemoveMemberParams, RemoveMemberUseCase};
use business::domain::membership::use_cases::update::{UpdateMemberParams, UpdateMemberUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::membership::dto::{AddMemberRequest, MemberResponse, UpdateMemberRequest};
use crate::api::tags::ApiTags;

pub struct MemberApi {
    add_use_case: Arc<dyn AddMemberUseCase>,
    get_all_use_case: Arc<dyn GetClubMembersUseCase>,
    update_use_case: Arc<dyn UpdateMemberUseCase>,
    remove_use_case: Arc<dyn RemoveMemberUseCase>,
}

impl MemberApi {
    pub fn new(
        add_use_case: Arc<dyn AddMemberUseCase>,
        get_all_use_case: Arc<dyn GetClubMembersUseCase>,
        update_use_case: Arc<dyn UpdateMemberUseCase>,
        remove_use_case: Arc<dyn RemoveMemberUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            get_all_use_case,
            update_use_case,
            remove_use_case,
        }
    }
}

/// Club roster management API
///
/// Endpoints for managing the members of a club.
#[OpenApi]
impl MemberApi {
    /// List club members
    ///
    /// Returns every membership of the club, with the person's name and
    /// email resolved when the person still exists.
    #[oai(
        path = "/clubs/:club_id/members",
        method = "get",
        tag = "ApiTags::Members"
    )]
    async fn get_all(&self, club_id: Path<String>) -> GetClubMembersResponse {
        let club_uuid = match Uuid::parse_str(&club_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetClubMembersResponse::BadRequest(ErrorResponse::validation(
                    "club.invalid_id",
                ));
            }
        };

        match self
            .get_all_use_case
            .execute(GetClubMembersParams { club_id: club_uuid })
            .await
        {
            Ok(members) => {
                let responses: Vec<MemberResponse> =
                    members.into_iter().map(|m| m.into()).collect();
                GetClubMembersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetClubMembersResponse::NotFound(json),
                    _ => GetClubMembersResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a member to a club
    ///
    /// Both the club and the person must exist. Role defaults to "member"
    /// and status to "active".
    #[oai(
        path = "/clubs/:club_id/members",
        method = "post",
        tag = "ApiTags::Members"
    )]
    async fn add(&self, club_id: Path<String>, body: Json<AddMemberRequest>) -> AddMemberResponse {
        let club_uuid = match Uuid::parse_str(&club_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddMemberResponse::BadRequest(ErrorResponse::validation(
                    "club.invalid_id",
                ));
            }
        };
        let person_uuid = match Uuid::parse_str(&body.0.person_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddMemberResponse::BadRequest(ErrorResponse::validation(
                    "membership.invalid_person_id",
                ));
            }
        };
        let role = match body.0.role.as_deref().map(MemberRole::parse).transpose() {
            Ok(role) => role,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return AddMemberResponse::BadRequest(json);
            }
        };
        let status = match body.0.status.as_deref().map(MemberStatus::parse).transpose() {
            Ok(status) => status,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return AddMemberResponse::BadRequest(json);
            }
        };

        let params = AddMemberParams {
            club_id: club_uuid,
            person_id: person_uuid,
            role,
            status,
            title: body.0.title,
        };

        match self.add_use_case.execute(params).await {
            Ok(membership) => AddMemberResponse::Created(Json(membership.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddMemberResponse::BadRequest(json),
                    404 => AddMemberResponse::NotFound(json),
                    _ => AddMemberResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a club member
    ///
    /// Omitted fields keep their current value; an empty string clears the
    /// title.
    #[oai(
        path = "/clubs/:club_id/members/:member_id",
        method = "put",
        tag = "ApiTags::Members"
    )]
    async fn update(
        &self,
        club_id: Path<String>,
        member_id: Path<String>,
        body: Json<UpdateMemberRequest>,
    ) -> UpdateMemberResponse {
        let club_uuid = match Uuid::parse_str(&club_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateMemberResponse::BadRequest(ErrorResponse::validation(
                    "club.invalid_id",
                ));
            }
        };
        let member_uuid = match Uuid::parse_str(&member_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateMemberResponse::BadRequest(ErrorResponse::validation(
                    "membership.invalid_id",
                ));
            }
        };
        let role = match body.0.role.as_deref().map(MemberRole::parse).transpose() {
            Ok(role) => role,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return UpdateMemberResponse::BadRequest(json);
            }
        };
        let status = match body.0.status.as_deref().map(MemberStatus::parse).transpose() {
            Ok(status) => status,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return UpdateMemberResponse::BadRequest(json);
            }
        };

        let params = UpdateMemberParams {
            club_id: club_uuid,
            id: member_uuid,
            role,
            status,
            title: body.0.title,
        };

        match self.update_use_case.execute(params).await {
            Ok(membership) => UpdateMemberResponse::Ok(Json(membership.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateMemberResponse::BadRequest(json),
                    404 => UpdateMemberResponse::NotFound(json),
                    _ => UpdateMemberResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a member from a club
    #[oai(
        path = "/clubs/:club_id/members/:member_id",
        method = "delete",
        tag = "ApiTags::Members"
    )]
    async fn remove(&self, club_id: Path<String>, member_id: Path<String>) -> RemoveMemberResponse {
        let club_uuid = match Uuid::parse_str(&club_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveMemberResponse::BadRequest(ErrorResponse::validation(
                    "club.invalid_id",
                ));
            }
        };
        let member_uuid = match Uuid::parse_str(&member_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveMemberResponse::BadRequest(ErrorResponse::validation(
                    "membership.invalid_id",
                ));
            }
        };

        match self
            .remove_use_case
            .execute(RemoveMemberParams {
                club_id: club_uuid,
                id: member_uuid,
            })
            .await
        {
            Ok(()) => RemoveMemberResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveMemberResponse::NotFound(json),
                    _ => RemoveMemberResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetClubMembersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MemberResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddMemberResponse {
    #[oai(status = 201)]
    Created(Json<MemberResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateMemberResponse {
    #[oai(status = 200)]
    Ok(Json<MemberResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveMemberResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
