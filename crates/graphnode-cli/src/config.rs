//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use graphnode_api::ApiSettings;
use graphnode_query::{AllowList, DEFAULT_PROPERTY_FIELDS};
use serde::{Deserialize, Serialize};

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("graphnode")
        .join("config.toml")
}

/// Where the store is loaded from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON fixture; the seed dataset is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture: Option<PathBuf>,
}

/// Query engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Property names accepted as `by` values
    pub property_fields: Vec<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            property_fields: DEFAULT_PROPERTY_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ApiSettings,
    pub store: StoreConfig,
    pub query: QueryConfig,
}

const KEYS: &[&str] = &[
    "server.bind",
    "server.allowed_origins",
    "server.empty_match_is_not_found",
    "store.fixture",
    "query.property_fields",
];

impl Config {
    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        KEYS
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "server.bind" => Some(self.server.bind.clone()),
            "server.allowed_origins" => Some(self.server.allowed_origins.join(",")),
            "server.empty_match_is_not_found" => {
                Some(self.server.empty_match_is_not_found.to_string())
            }
            "store.fixture" => Some(
                self.store
                    .fixture
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "query.property_fields" => Some(self.query.property_fields.join(",")),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "server.bind" => {
                value
                    .parse::<std::net::SocketAddr>()
                    .with_context(|| format!("Invalid socket address: {}", value))?;
                self.server.bind = value.to_string();
            }
            "server.allowed_origins" => self.server.allowed_origins = split_list(value),
            "server.empty_match_is_not_found" => {
                self.server.empty_match_is_not_found = value
                    .parse::<bool>()
                    .with_context(|| format!("Expected true or false, got: {}", value))?;
            }
            "store.fixture" => {
                self.store.fixture = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "query.property_fields" => {
                let fields = split_list(value);
                AllowList::with_properties(fields.iter().map(String::as_str))?;
                self.query.property_fields = fields;
            }
            _ => anyhow::bail!(
                "Unknown config key: {}. Available keys: {}",
                key,
                KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Allow-list built from the configured property fields
    pub fn allow_list(&self) -> anyhow::Result<AllowList> {
        if self.query == QueryConfig::default() {
            return Ok(AllowList::default());
        }
        Ok(AllowList::with_properties(
            self.query.property_fields.iter().map(String::as_str),
        )?)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
