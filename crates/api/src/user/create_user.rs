use crate::error::StudyError;
use crate::shared::{
    usecase::{execute, UseCase},
    JsonOrForm,
};
use actix_web::{web, HttpResponse};
use study_api_api_structs::{create_user::*, dtos::UserDTO};
use study_api_domain::{NewUser, User};
use study_api_infra::StudyContext;

pub async fn create_user_controller(
    body: JsonOrForm<RequestBody>,
    ctx: web::Data<StudyContext>,
) -> Result<HttpResponse, StudyError> {
    let body = body.into_inner();
    let usecase = CreateUserUseCase {
        name: body.name,
        email: body.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Created().json(UserDTO::new(usecase_res.user)))
        .map_err(StudyError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    MissingNameOrEmail,
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for StudyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingNameOrEmail => {
                Self::BadClientData("Name and email are required".into())
            }
            UseCaseError::StorageError(e) => Self::internal("Error creating user", e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = UseCaseRes;
    type Errors = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &StudyContext) -> Result<Self::Response, Self::Errors> {
        let new_user = NewUser::new(self.name.take(), self.email.take())
            .map_err(|_| UseCaseError::MissingNameOrEmail)?;

        ctx.repos
            .users
            .insert(&new_user)
            .await
            .map(|user| UseCaseRes { user })
            .map_err(UseCaseError::StorageError)
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
    async fn creates_user_with_fresh_id() {
        let ctx = setup();
        let mut usecase = CreateUserUseCase {
            name: Some("X".into()),
            email: Some("x@x.com".into()),
        };
        let res = usecase.execute(&ctx).await.expect("To create user");
        assert_eq!(res.user.id.inner(), 3);
        assert_eq!(res.user.name, "X");
        assert_eq!(res.user.email, "x@x.com");

        let stored = ctx.repos.users.find(&res.user.id).await.unwrap();
        assert_eq!(stored, Some(res.user));
    }

    #[actix_web::test]
    async fn rejects_missing_fields_without_touching_the_store() {
        let ctx = setup();
        let mut usecase = CreateUserUseCase {
            name: Some("".into()),
            email: None,
        };
        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::MissingNameOrEmail)));
        assert_eq!(ctx.repos.users.find_all().await.unwrap().len(), 2);
    }
}
