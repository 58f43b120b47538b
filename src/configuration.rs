use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub backend: BackendSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    /// Service name attached to every emitted log record.
    pub name: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct BackendSettings {
    /// Artificial latency of the simulated subscription service, in milliseconds.
    ///
    /// Environment variables are strings, so we need serde-aux's help to parse the value as a
    /// number when it is supplied via `APP_BACKEND__LATENCY_MS`.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub latency_ms: u64,
}

impl BackendSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_BACKEND__LATENCY_MS=500` would set `Settings.backend.latency_ms`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
