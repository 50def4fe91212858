use axum::{http::StatusCode, routing::post, Json, Router};
use patient_service::config::PatientConfig;
use patient_service::services::PatientDb;
use patient_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: PatientDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_predictor("http://127.0.0.1:5000/predict").await
    }

    /// Spawn the gateway on a random port against a unique database,
    /// pointed at the given prediction endpoint.
    pub async fn spawn_with_predictor(predictor_url: &str) -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let db_name = format!("patient_test_{}", Uuid::new_v4());

        let mut config = PatientConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();
        config.predictor.url = predictor_url.to_string();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Cleanup test resources (drop the test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

/// Spawn a local stand-in for the prediction service that always answers
/// with `status` and `body`. Returns the full predict URL.
pub async fn spawn_predictor_stub(status: StatusCode, body: serde_json::Value) -> String {
    let app = Router::new().route(
        "/predict",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{}/predict", addr)
}
