use std::path::PathBuf;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Unix socket path; takes precedence over `listen`
    pub socket: Option<String>,

    /// JSON file of projects for the in-memory store
    pub seed_file: Option<PathBuf>,

    /// Firestore configuration
    pub firestore: Option<FirestoreConfig>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FirestoreConfig {
    /// Google Cloud project id
    pub project_id: String,

    /// Web API key, sent as the `key` query parameter
    pub api_key: Option<String>,

    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_collection")]
    pub collection: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_collection() -> String {
    "projects".to_string()
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: None,
            database: default_database(),
            collection: default_collection(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint (if None, uses OTEL_EXPORTER_OTLP_ENDPOINT env var)
    pub endpoint: Option<String>,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nested keys use a double underscore:
    /// - TEDDVERSE_LISTEN
    /// - TEDDVERSE_SOCKET
    /// - TEDDVERSE_SEED_FILE
    /// - TEDDVERSE_FIRESTORE__PROJECT_ID
    /// - TEDDVERSE_FIRESTORE__API_KEY
    /// - TEDDVERSE_FIRESTORE__COLLECTION
    /// - TEDDVERSE_FIRESTORE__TIMEOUT_SECS
    /// - TEDDVERSE_OTEL__ENDPOINT
    /// - TEDDVERSE_OTEL__ENVIRONMENT
    ///
    /// FIREBASE_PROJECT_ID and FIREBASE_API_KEY are honoured when no
    /// Firestore section is configured.
    ///
    /// # Errors
    ///
    /// Fails when a variable cannot be parsed into its field.
    pub fn load() -> Result<Self, figment::Error> {
        let mut config = Self::from_figment(&Self::figment())?;
        config.apply_firebase_env_vars();
        Ok(config)
    }

    /// The provider stack used by [`Config::load`].
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("TEDDVERSE_").split("__"))
    }

    /// Extract configuration from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Fails when the merged values do not form a valid [`Config`].
    pub fn from_figment(figment: &Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    fn apply_firebase_env_vars(&mut self) {
        if self.firestore.is_none() {
            if let Ok(project_id) = std::env::var("FIREBASE_PROJECT_ID") {
                let mut firestore = FirestoreConfig::new(project_id);
                firestore.api_key = std::env::var("FIREBASE_API_KEY").ok();
                self.firestore = Some(firestore);
            }
        }
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
    otel: OtelConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            otel: OtelConfig::default(),
        }
    }
}
