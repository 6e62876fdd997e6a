use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    backend: Backend,
    device: Device,
}

impl AppConfig {
    /// Reads `config.toml`, then the optional `config_local.toml`, then `SIMULATOR_*` environment variables
    /// (`__` separates nested keys, e.g. `SIMULATOR_DEVICE__POLL_INTERVAL=500ms`).
    pub fn load() -> Result<Self, AppConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("SIMULATOR").prefix_separator("_").separator("__"));

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppConfigError> {
        if self.device.id.trim().is_empty() {
            return Err(AppConfigError::EmptyDeviceId);
        }
        if self.device.poll_interval.is_zero() {
            return Err(AppConfigError::ZeroPollInterval);
        }
        Ok(())
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

#[derive(Debug, Deserialize)]
pub struct Backend {
    url: String,
}

impl Backend {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
pub struct Device {
    id: String,
    #[serde(with = "humantime_serde")]
    poll_interval: Duration,
}

impl Device {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("unable to load the configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("the device id must not be empty")]
    EmptyDeviceId,
    #[error("the poll interval must be greater than zero")]
    ZeroPollInterval,
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                backend: Backend {
                    url: "http://localhost:8080/api".to_string(),
                },
                device: Device {
                    id: "ESP32_SIMULATOR".to_string(),
                    poll_interval: Duration::from_millis(10),
                },
            },
        }
    }

    pub fn backend_url(mut self, url: String) -> Self {
        self.config.backend.url = url;
        self
    }

    pub fn device_id(mut self, id: &str) -> Self {
        self.config.device.id = id.to_string();
        self
    }

    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.config.device.poll_interval = poll_interval;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
