use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory holding the message database
    #[arg(long, env = "CORKBOARD_DATA_DIR", default_value = "./corkboard-data")]
    pub data_dir: PathBuf,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub board: BoardConfig,

    #[command(flatten)]
    pub health: HealthConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "CORKBOARD_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CORKBOARD_PORT", default_value_t = 3000)]
    pub port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct BoardConfig {
    /// Maximum encoded size of a stored message record in bytes
    #[arg(long, env = "CORKBOARD_MAX_RECORD_BYTES", default_value_t = 1024)]
    pub max_record_bytes: usize,
}

#[derive(Clone, Debug, Args)]
pub struct HealthConfig {
    /// Timeout for the readiness probe's storage check
    #[arg(long, env = "CORKBOARD_STORAGE_TIMEOUT_MS", default_value_t = 1000)]
    pub storage_timeout_ms: u64,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "CORKBOARD_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
