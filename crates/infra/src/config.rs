use tracing::warn;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: u16,
    /// Connection string of the postgres database. The users are kept
    /// in memory when this is not provided.
    pub database_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let port = match std::env::var("PORT") {
            Ok(port) => parse_port(&port),
            Err(_) => DEFAULT_PORT,
        };
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.is_empty());

        Self { port, database_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_port(port: &str) -> u16 {
    match port.parse::<u16>() {
        Ok(port) => port,
        Err(_) => {
            warn!(
                "The given PORT: {} is not valid, falling back to the default port: {}.",
                port, DEFAULT_PORT
            );
            DEFAULT_PORT
        }
    }
}
