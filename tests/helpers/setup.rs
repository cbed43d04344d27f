use study_api_api::Application;
use study_api_infra::{Config, StudyContext};
use study_api_sdk::StudySDK;

pub struct TestApp {
    pub address: String,
}

// Launch the application as a background task with a fresh in memory store
pub async fn spawn_app() -> (TestApp, StudySDK) {
    let config = Config {
        port: 0, // Random port
        database_url: None,
    };
    let ctx = StudyContext::create_inmemory(config);

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = StudySDK::new(address.clone());
    (TestApp { address }, sdk)
}
