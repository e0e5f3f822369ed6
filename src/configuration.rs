use crate::domain::position::{OffsetBound, OffsetBoundError};
use crate::domain::{LocationRecord, Registry, RegistryError};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub position: PositionSettings,
    /// Replaces the built-in landmarks when non-empty.
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct PositionSettings {
    #[serde(
        default = "default_live_timeout_milliseconds",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub live_timeout_milliseconds: u64,
    #[serde(
        default = "default_synthetic_offset_degrees",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub synthetic_offset_degrees: f64,
    #[serde(default)]
    pub synthetic_seed: Option<u64>,
}

fn default_live_timeout_milliseconds() -> u64 {
    10_000
}

fn default_synthetic_offset_degrees() -> f64 {
    0.001 // ~100m
}

impl PositionSettings {
    pub fn live_timeout(&self) -> Duration {
        Duration::from_millis(self.live_timeout_milliseconds)
    }

    pub fn offset_bound(&self) -> Result<OffsetBound, OffsetBoundError> {
        OffsetBound::parse(self.synthetic_offset_degrees)
    }
}

impl Settings {
    /// Build the location registry from the configured list, or the seed when none is given.
    pub fn registry(&self) -> Result<Registry, RegistryError> {
        if self.locations.is_empty() {
            Registry::seed()
        } else {
            Registry::new(self.locations.clone())
        }
    }
}

/// The runtime environment for our application.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}
impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not supported environment.\
                Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let environment_filename = format!("{}.yaml", environment.as_str());

    // Initialise our configuration reader
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    // Try to convert the configuration values it read into
    // our Settings type
    settings.try_deserialize::<Settings>()
}
