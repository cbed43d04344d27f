use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Mutex,
};
use study_api_domain::{NewUser, User, UserPatch, ID};

pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    /// Ids are taken from this counter and never from the size of the
    /// collection, so that an id freed by a delete is not handed out again.
    last_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(vec![]),
            last_id: AtomicI64::new(0),
        }
    }

    /// Creates the repo with `users` inserted in the given order
    pub fn with_users(users: Vec<NewUser>) -> Self {
        let last_id = users.len() as i64;
        let users = users
            .into_iter()
            .zip(1..)
            .map(|(user, id)| User::new(ID::from(id), user))
            .collect();
        Self {
            users: Mutex::new(users),
            last_id: AtomicI64::new(last_id),
        }
    }

    fn next_id(&self) -> ID {
        ID::from(self.last_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &NewUser) -> anyhow::Result<User> {
        insert_with(&self.users, || User::new(self.next_id(), user.clone()))
    }

    async fn update(&self, user_id: &ID, patch: &UserPatch) -> anyhow::Result<Option<User>> {
        update(user_id, &self.users, |user| patch.apply(user))
    }

    async fn delete(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        delete(user_id, &self.users)
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        find(user_id, &self.users)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        find_all(&self.users)
    }
}
