mod inmemory;
mod postgres;

pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;
use study_api_domain::{NewUser, User, UserPatch, ID};

/// Storage of `User`s.
///
/// A missing user is reported as `None`, errors are reserved for
/// failures of the underlying storage.
#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    /// Stores the user under a freshly assigned id
    async fn insert(&self, user: &NewUser) -> anyhow::Result<User>;
    async fn update(&self, user_id: &ID, patch: &UserPatch) -> anyhow::Result<Option<User>>;
    async fn delete(&self, user_id: &ID) -> anyhow::Result<Option<User>>;
    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>>;
    /// All users in the order they were inserted
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
}
