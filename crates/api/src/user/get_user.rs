use crate::error::StudyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use study_api_api_structs::{dtos::UserDTO, get_user::*};
use study_api_domain::{User, ID};
use study_api_infra::StudyContext;

pub async fn get_user_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<StudyContext>,
) -> Result<HttpResponse, StudyError> {
    let usecase = GetUserUseCase {
        user_id: path_params.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(UserDTO::new(usecase_res.user)))
        .map_err(StudyError::from)
}

#[derive(Debug)]
struct GetUserUseCase {
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
            UseCaseError::StorageError(e) => Self::internal("Error fetching user", e),
            UseCaseError::UserNotFound => Self::user_not_found(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserUseCase {
    type Response = UseCaseRes;
    type Errors = UseCaseError;

    const NAME: &'static str = "GetUser";

    async fn execute(&mut self, ctx: &StudyContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.users.find(&self.user_id).await {
            Ok(Some(user)) => Ok(UseCaseRes { user }),
            Ok(None) => Err(UseCaseError::UserNotFound),
            Err(e) => Err(UseCaseError::StorageError(e)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use study_api_infra::Config;

    fn setup() -> StudyContext {
        StudyContext::create_inmemory(Config {
            port: 0,
            database_url: None,
        })
    }

    #[actix_web::test]
    async fn finds_existing_user() {
        let ctx = setup();
        let mut usecase = GetUserUseCase {
            user_id: ID::from(2),
        };
        let res = usecase.execute(&ctx).await.expect("To find user");
        assert_eq!(res.user.name, "Jane Smith");
    }

    #[actix_web::test]
    async fn rejects_unknown_user() {
        let ctx = setup();
        let mut usecase = GetUserUseCase {
            user_id: ID::from(99),
        };
        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::UserNotFound)));
    }
}
