use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    /// Only maintained by stores that keep track of time
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(id: ID, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for User {
    fn id(&self) -> ID {
        self.id
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidUserError {
    #[error("Name and email are required")]
    MissingNameOrEmail,
}

/// The fields of a `User` that is yet to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Both `name` and `email` has to be present and non empty
    pub fn new(name: Option<String>, email: Option<String>) -> Result<Self, InvalidUserError> {
        match (non_empty(name), non_empty(email)) {
            (Some(name), Some(email)) => Ok(Self { name, email }),
            _ => Err(InvalidUserError::MissingNameOrEmail),
        }
    }
}

/// A partial update of a `User`.
///
/// Fields that are `None` are left untouched when the patch is applied.
/// Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self {
            name: non_empty(name),
            email: non_empty(email),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
