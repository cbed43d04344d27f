use crate::error::StudyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use study_api_api_structs::get_users::*;
use study_api_domain::User;
use study_api_infra::StudyContext;

pub async fn get_users_controller(
    ctx: web::Data<StudyContext>,
) -> Result<HttpResponse, StudyError> {
    let usecase = GetUsersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(new_response(usecase_res.users)))
        .map_err(StudyError::from)
}

#[derive(Debug)]
struct GetUsersUseCase {}

#[derive(Debug)]
struct UseCaseRes {
    pub users: Vec<User>,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for StudyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(e) => Self::internal("Error fetching users", e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUsersUseCase {
    type Response = UseCaseRes;
    type Errors = UseCaseError;

    const NAME: &'static str = "GetUsers";

    async fn execute(&mut self, ctx: &StudyContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .users
            .find_all()
            .await
            .map(|users| UseCaseRes { users })
            .map_err(UseCaseError::StorageError)
    }
}
