use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::infrastructure::llm::DEFAULT_GEMINI_BASE_URL;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub youtube: YoutubeSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Front-end origin allowed by CORS; any origin when unset.
    #[serde(default)]
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl GeminiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeSettings {
    pub base_url: String,
    pub caption_language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.{env}`, then `APP_SECTION__KEY` variables,
    /// then the legacy `GEMINI_API_KEY`, `FRONTEND_URL` and `PORT` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?.build()?.try_deserialize()
    }

    pub fn builder(environment: Environment) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5122)?
            .set_default("gemini.api_key", "")?
            .set_default("gemini.model", "gemini-2.5-flash")?
            .set_default("gemini.base_url", DEFAULT_GEMINI_BASE_URL)?
            .set_default("gemini.timeout_secs", 120)?
            .set_default("youtube.base_url", "https://www.youtube.com")?
            .set_default("youtube.caption_language", "en")?
            .set_default("upload.dir", "uploads")?
            .set_default("upload.max_file_size_mb", 25)?
            .set_default("logging.level", "info,recap=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("gemini.api_key", std::env::var("GEMINI_API_KEY").ok())?
            .set_override_option("server.cors_origin", std::env::var("FRONTEND_URL").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())
    }
}
