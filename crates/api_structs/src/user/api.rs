use crate::dtos::UserDTO;
use serde::{Deserialize, Serialize};
use study_api_domain::{User, ID};

/// Body shared by the create and update requests. Both fields are
/// optional on the wire, the handlers decide what is required.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFieldsBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserPathParams {
    pub user_id: ID,
}

pub mod get_users {
    use super::*;

    pub type APIResponse = Vec<UserDTO>;

    pub fn new_response(users: Vec<User>) -> APIResponse {
        users.into_iter().map(UserDTO::new).collect()
    }
}

pub mod get_user {
    use super::*;

    pub type PathParams = UserPathParams;

    pub type APIResponse = UserDTO;
}

pub mod create_user {
    use super::*;

    pub type RequestBody = UserFieldsBody;

    pub type APIResponse = UserDTO;
}

pub mod update_user {
    use super::*;

    pub type RequestBody = UserFieldsBody;

    pub type PathParams = UserPathParams;

    pub type APIResponse = UserDTO;
}

pub mod delete_user {
    use super::*;

    pub type PathParams = UserPathParams;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
        pub user: UserDTO,
    }

    impl APIResponse {
        pub fn new(user: User) -> Self {
            Self {
                message: "User deleted successfully".into(),
                user: UserDTO::new(user),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use study_api_domain::NewUser;

    fn user() -> User {
        User::new(
            ID::from(1),
            NewUser {
                name: "John Doe".into(),
                email: "john@example.com".into(),
            },
        )
    }

    #[test]
    fn user_without_timestamps_serializes_three_fields() {
        let json = serde_json::to_value(UserDTO::new(user())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "John Doe", "email": "john@example.com"})
        );
    }

    #[test]
    fn timestamps_are_camel_cased() {
        let mut user = user();
        user.created_at = Some(chrono::Utc::now());
        user.updated_at = user.created_at;
        let json = serde_json::to_value(UserDTO::new(user)).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn delete_response_wraps_the_removed_user() {
        let json = serde_json::to_value(delete_user::APIResponse::new(user())).unwrap();
        assert_eq!(json["message"], "User deleted successfully");
        assert_eq!(json["user"]["id"], 1);
    }

    #[test]
    fn request_body_fields_are_optional() {
        let body: UserFieldsBody = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert_eq!(body.name.as_deref(), Some("X"));
        assert!(body.email.is_none());
    }
}
