mod config;
mod repos;

pub use config::Config;
pub use repos::{sample_users, IUserRepo, InMemoryUserRepo, PostgresUserRepo, Repos};
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

#[derive(Clone)]
pub struct StudyContext {
    pub repos: Repos,
    pub config: Config,
}

impl StudyContext {
    /// Context backed by the in memory store, seeded with the sample users
    pub fn create_inmemory(config: Config) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config,
        }
    }

    async fn create_postgres(config: Config, connection_string: &str) -> anyhow::Result<Self> {
        let pool = connect_postgres(connection_string).await?;
        info!("Running database migrations ...");
        run_migration(&pool).await?;
        info!("Running database migrations ... [done]");

        Ok(Self {
            repos: Repos::create_postgres(pool),
            config,
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<StudyContext> {
    let config = Config::new();
    match config.database_url.clone() {
        Some(connection_string) => {
            info!("DATABASE_URL is set, users are stored in postgres");
            StudyContext::create_postgres(config, &connection_string).await
        }
        None => {
            info!("DATABASE_URL is not set, users are stored in memory");
            Ok(StudyContext::create_inmemory(config))
        }
    }
}

async fn connect_postgres(connection_string: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(connection_string)
        .await
}

pub async fn run_migration(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}
