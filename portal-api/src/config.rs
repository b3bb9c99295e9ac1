use chrono::Duration;
use config::{Config, ConfigError, File};
use portal_core::ShiftCalculator;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_APP_ID: &str = "personal-portal";

/// A workday fits in one day
pub const MAX_WORKDAY_MINUTES: i64 = 24 * 60;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub cors: Option<CorsConfig>,
    pub server: Option<ServerConfig>,
    pub store: Option<StoreConfig>,
    pub timeclock: Option<TimeclockConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            server: Some(ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            }),
            store: Some(StoreConfig {
                app_id: DEFAULT_APP_ID.to_string(),
            }),
            timeclock: Some(TimeclockConfig::default()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    /// Namespace of every collection path, `artifacts/{app_id}/users/...`
    pub app_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TimeclockConfig {
    pub workday_minutes: i64,
}

impl Default for TimeclockConfig {
    fn default() -> Self {
        Self {
            workday_minutes: portal_core::shift::WORKDAY_MINUTES,
        }
    }
}

const DEFAULT_CONFIG: &str = r#"
[cors]
allowed_origins = ["http://localhost:3000"]

[server]
host = "127.0.0.1"
port = 8080

[store]
# Namespace shared by all users of this portal
app_id = "personal-portal"

[timeclock]
# Length of a workday, lunch excluded
workday_minutes = 480
"#;

impl ApiConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();
        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    /// Reads the config at `config_path`, writing the default file first if
    /// there is none yet.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.to_path_buf()))
            .build()?;

        let config: ApiConfig = builder.try_deserialize()?;

        if let Some(timeclock) = &config.timeclock {
            if !(1..=MAX_WORKDAY_MINUTES).contains(&timeclock.workday_minutes) {
                return Err(ConfigError::Message(format!(
                    "timeclock.workday_minutes must be between 1 and {}, got {}",
                    MAX_WORKDAY_MINUTES, timeclock.workday_minutes
                )));
            }
        }

        if let Some(store) = &config.store {
            if store.app_id.trim().is_empty() || store.app_id.contains('/') {
                return Err(ConfigError::Message(format!(
                    "store.app_id is not a valid path segment: '{}'",
                    store.app_id
                )));
            }
        }

        Ok(config)
    }

    pub fn app_id(&self) -> String {
        self.store
            .as_ref()
            .map(|store| store.app_id.clone())
            .unwrap_or_else(|| DEFAULT_APP_ID.to_string())
    }

    pub fn shift_calculator(&self) -> ShiftCalculator {
        match &self.timeclock {
            Some(timeclock) => {
                ShiftCalculator::with_workday(Duration::minutes(timeclock.workday_minutes))
            }
            None => ShiftCalculator::default(),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        if let Some(server_config) = &self.server {
            (server_config.host.clone(), server_config.port)
        } else {
            ("127.0.0.1".to_string(), 8080)
        }
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("portal").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
