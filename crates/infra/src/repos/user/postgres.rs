use super::IUserRepo;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use study_api_domain::{NewUser, User, UserPatch, ID};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRaw> for User {
    fn from(raw: UserRaw) -> Self {
        User {
            id: raw.id.into(),
            name: raw.name,
            email: raw.email,
            created_at: Some(raw.created_at),
            updated_at: Some(raw.updated_at),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &NewUser) -> anyhow::Result<User> {
        let user: UserRaw = sqlx::query_as(
            r#"
            INSERT INTO users(name, email)
            VALUES($1, $2)
            RETURNING *
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(user.into())
    }

    async fn update(&self, user_id: &ID, patch: &UserPatch) -> anyhow::Result<Option<User>> {
        let user: Option<UserRaw> = sqlx::query_as(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
            email = COALESCE($3, email),
            updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user_id.inner())
        .bind(&patch.name)
        .bind(&patch.email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(|u| u.into()))
    }

    async fn delete(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        let user: Option<UserRaw> = sqlx::query_as(
            r#"
            DELETE FROM users AS u
            WHERE u.id = $1
            RETURNING *
            "#,
        )
        .bind(user_id.inner())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(|u| u.into()))
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        let user: Option<UserRaw> = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            WHERE u.id = $1
            "#,
        )
        .bind(user_id.inner())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user.map(|u| u.into()))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let users: Vec<UserRaw> = sqlx::query_as(
            r#"
            SELECT * FROM users AS u
            ORDER BY u.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users.into_iter().map(|u| u.into()).collect())
    }
}
