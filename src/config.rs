use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{MatchWeights, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    /// Truncate and reseed the catalog table on every boot.
    #[serde(default)]
    pub force_reseed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Weight tables per program type, overridable from config.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_mba_weights")]
    pub mba: WeightSet,
    #[serde(default = "default_ms_weights")]
    pub ms: WeightSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightSet {
    pub exam: f64,
    pub gpa: f64,
    pub work: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            mba: default_mba_weights(),
            ms: default_ms_weights(),
        }
    }
}

fn default_mba_weights() -> WeightSet {
    WeightSet {
        exam: 0.5,
        gpa: 0.3,
        work: 0.2,
    }
}

fn default_ms_weights() -> WeightSet {
    WeightSet {
        exam: 0.45,
        gpa: 0.45,
        work: 0.1,
    }
}

impl WeightsConfig {
    /// Convert the deserialized tables into the domain weight type.
    pub fn to_match_weights(&self) -> MatchWeights {
        MatchWeights {
            mba: ScoringWeights {
                exam: self.mba.exam,
                gpa: self.mba.gpa,
                work: self.mba.work,
            },
            ms: ScoringWeights {
                exam: self.ms.exam,
                gpa: self.ms.gpa,
                work: self.ms.work,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ORBIT_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ORBIT_)
            // e.g., ORBIT__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ORBIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ORBIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the conventional DATABASE_URL override on top of file config.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    // DATABASE_URL wins over both config files and ORBIT__DATABASE__URL.
    let database_url = env::var("DATABASE_URL")
        .or_else(|_| env::var("ORBIT__DATABASE__URL"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = database_url {
        builder = builder.set_override("database.url", url)?;
    }

    builder.build()
}
