use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub name: String,
    /// Address every inquiry draft is sent to
    pub recipient: String,
    pub soundcloud_url: String,
    pub youtube_url: String,
    /// Fixed project type options. Empty means a free-text field.
    #[serde(default)]
    pub project_types: Vec<String>,
}

impl SiteConfig {
    /// Handle shown next to the YouTube link, e.g. `@project-recordsllc`
    pub fn youtube_handle(&self) -> &str {
        self.youtube_url
            .rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or(&self.youtube_url)
    }

    /// `soundcloud.com/projectrecordsllc`
    pub fn soundcloud_label(&self) -> &str {
        let url = self
            .soundcloud_url
            .trim_start_matches("https://")
            .trim_start_matches("http://");

        url.strip_prefix("www.").unwrap_or(url)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PROJECT_RECORDS__SITE__RECIPIENT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("site.name", "Project Records LLC")?
            .set_default("site.recipient", "tom@project-records.com")?
            .set_default("site.soundcloud_url", "https://soundcloud.com/projectrecordsllc")?
            .set_default("site.youtube_url", "https://www.youtube.com/@project-recordsllc")?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", LogFormat::default().to_string())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PROJECT_RECORDS")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("site.project_types")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.site.recipient.validate_email() || !self.site.recipient.is_ascii() {
            return Err(format!(
                "Site recipient must be a valid ASCII email address, got {:?}",
                self.site.recipient
            ));
        }
        for (key, url) in [
            ("soundcloud_url", &self.site.soundcloud_url),
            ("youtube_url", &self.site.youtube_url),
        ] {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(format!("Site {key} must be an http(s) URL"));
            }
        }
        if self.site.project_types.iter().any(|t| t.trim().is_empty()) {
            return Err("Site project_types must not contain empty options".to_string());
        }
        Ok(())
    }
}
