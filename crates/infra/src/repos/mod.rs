mod shared;
mod user;

use sqlx::PgPool;
use std::sync::Arc;
use study_api_domain::NewUser;

pub use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    pub fn create_postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PostgresUserRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::with_users(sample_users())),
        }
    }
}

/// Users the in memory store starts out with
pub fn sample_users() -> Vec<NewUser> {
    vec![
        NewUser {
            name: "John Doe".into(),
            email: "john@example.com".into(),
        },
        NewUser {
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
        },
    ]
}
