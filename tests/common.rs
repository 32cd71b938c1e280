#![allow(dead_code, clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, missing_debug_implementations, unreachable_pub)]
use corkboard_server::api::{self, ServiceContainer};
use corkboard_server::config::{BoardConfig, Config, HealthConfig, LogFormat, ServerConfig, TelemetryConfig};
use corkboard_server::services::health_service::HealthService;
use corkboard_server::services::message_service::MessageService;
use corkboard_server::storage;
use corkboard_server::storage::message_repo::MessageRepository;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("corkboard_server=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap())
            .add_directive("sled=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

pub fn get_test_config(data_dir: &std::path::Path) -> Config {
    Config {
        data_dir: data_dir.to_path_buf(),
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 0 },
        board: BoardConfig { max_record_bytes: 1024 },
        health: HealthConfig { storage_timeout_ms: 1000 },
        telemetry: TelemetryConfig { log_format: LogFormat::Text },
    }
}

pub struct TestApp {
    pub server_url: String,
    pub client: reqwest::Client,
    pub config: Config,
    // Dropped with the app; removes the on-disk store.
    _data_dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp data dir");
        let config = get_test_config(data_dir.path());
        Self::spawn_with_config(config, data_dir).await
    }

    pub async fn spawn_with_config(config: Config, data_dir: TempDir) -> Self {
        setup_tracing();

        let db = storage::open_database(&config.data_dir).expect("Failed to open test database");
        let tree = storage::open_messages_tree(&db).expect("Failed to open messages tree");

        let services = ServiceContainer {
            message_service: MessageService::new(MessageRepository::new(tree), config.board.clone()),
            health_service: HealthService::new(db, config.health.clone()),
        };

        let app = api::app_router(config.clone(), services);

        let listener =
            tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server crashed");
        });

        Self {
            server_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            config,
            _data_dir: data_dir,
        }
    }

    /// Creates a message over HTTP and returns the response body.
    pub async fn create_message(&self, title: &str, body: &str, attachment_url: &str) -> serde_json::Value {
        let resp = self
            .client
            .post(format!("{}/v1/messages", self.server_url))
            .json(&serde_json::json!({
                "title": title,
                "body": body,
                "attachmentURL": attachment_url,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
        resp.json().await.unwrap()
    }

    pub async fn list_messages(&self) -> Vec<serde_json::Value> {
        let resp = self.client.get(format!("{}/v1/messages", self.server_url)).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        resp.json().await.unwrap()
    }
}
