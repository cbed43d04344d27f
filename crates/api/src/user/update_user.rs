use crate::error::StudyError;
use crate::shared::{
    usecase::{execute, UseCase},
    JsonOrForm,
};
use actix_web::{web, HttpResponse};
use study_api_api_structs::{dtos::UserDTO, update_user::*};
use study_api_domain::{User, UserPatch, ID};
use study_api_infra::StudyContext;

pub async fn update_user_controller(
    body: JsonOrForm<RequestBody>,
    path: web::Path<PathParams>,
    ctx: web::Data<StudyContext>,
) -> Result<HttpResponse, StudyError> {
    let body = body.into_inner();
    let usecase = UpdateUserUseCase {
        user_id: path.user_id,
        patch: UserPatch::new(body.name, body.email),
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(UserDTO::new(usecase_res.user)))
        .map_err(StudyError::from)
}

#[derive(Debug)]
pub struct UpdateUserUseCase {
    pub user_id: ID,
    pub patch: UserPatch,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(anyhow::Error),
    UserNotFound,
}

impl From<UseCaseError> for StudyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(e) => Self::internal("Error updating user", e),
            UseCaseError::UserNotFound => Self::user_not_found(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateUserUseCase {
    type Response = UseCaseRes;
    type Errors = UseCaseError;

    const NAME: &'static str = "UpdateUser";

    async fn execute(&mut self, ctx: &StudyContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.users.update(&self.user_id, &self.patch).await {
            Ok(Some(user)) => Ok(UseCaseRes { user }),
            Ok(None) => Err(UseCaseError::UserNotFound),
            Err(e) => Err(UseCaseError::StorageError(e)),
        }
    }
}
