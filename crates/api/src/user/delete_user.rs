use crate::error::StudyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use study_api_api_structs::delete_user::*;
use study_api_domain::{User, ID};
use study_api_infra::StudyContext;

pub async fn delete_user_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<StudyContext>,
) -> Result<HttpResponse, StudyError> {
    let usecase = DeleteUserUseCase {
        user_id: path_params.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.user)))
        .map_err(StudyError::from)
}

#[derive(Debug)]
struct DeleteUserUseCase {
    user_id: ID,
}

#[derive(Debug)]
struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError(anyhow::Error),
    UserNotFound,
}

impl From<UseCaseError> for StudyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(e) => Self::internal("Error deleting user", e),
            UseCaseError::UserNotFound => Self::user_not_found(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteUserUseCase {
    type Response = UseCaseRes;
    type Errors = UseCaseError;

    const NAME: &'static str = "DeleteUser";

    async fn execute(&mut self, ctx: &StudyContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.users.delete(&self.user_id).await {
            Ok(Some(user)) => Ok(UseCaseRes { user }),
            Ok(None) => Err(UseCaseError::UserNotFound),
            Err(e) => Err(UseCaseError::StorageError(e)),
        }
    }
}
