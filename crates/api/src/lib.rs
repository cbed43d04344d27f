#![recursion_limit = "256"]

mod docs;
mod error;
mod shared;
mod status;
mod user;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use error::StudyError;
use std::net::TcpListener;
use study_api_infra::StudyContext;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);
    docs::configure_routes(cfg);
    status::configure_routes(cfg);
    user::configure_routes(cfg);
}

/// Makes extractor failures answer with the same JSON error body as the
/// handlers do.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    // The only path parameter is the user id, and an id that is not an
    // integer can not belong to any user
    cfg.app_data(
        web::PathConfig::default().error_handler(|_err, _req| StudyError::user_not_found().into()),
    );
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: StudyContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: StudyContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let ctx = web::Data::new(context);

        let server = HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(ctx.clone())
                .configure(configure_server_api)
        })
        .listen(listener)?
        .workers(4)
        .run();

        info!("Server is running on port {}", port);

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
