mod base;
mod status;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use status::StatusClient;
pub use study_api_api_structs::delete_user::APIResponse as DeletedUser;
pub use study_api_domain::ID;
pub use user::{CreateUserInput, UpdateUserInput, UserClient};

// Domain
pub use study_api_api_structs::dtos::UserDTO as User;

use std::sync::Arc;

/// Study API SDK
///
/// The SDK contains methods for interacting with the Study API server.
#[derive(Clone)]
pub struct StudySDK {
    pub status: StatusClient,
    pub user: UserClient,
}

impl StudySDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let status = StatusClient::new(base.clone());
        let user = UserClient::new(base);

        Self { status, user }
    }
}
