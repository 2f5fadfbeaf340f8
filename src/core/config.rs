use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Environment variable that overrides the configured goldapi.io token.
pub const GOLDAPI_TOKEN_ENV: &str = "GOLDAPI_TOKEN";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GoldApiConfig {
    pub base_url: String,
    /// goldapi.io access token. `GOLDAPI_TOKEN` in the environment wins
    /// over this value.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for GoldApiConfig {
    fn default() -> Self {
        GoldApiConfig {
            base_url: "https://www.goldapi.io".to_string(),
            api_key: None,
        }
    }
}

impl GoldApiConfig {
    /// Resolves the access token from the environment or the config file.
    /// Fails before any request is made when neither is set.
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Ok(token) = std::env::var(GOLDAPI_TOKEN_ENV) {
            if !token.is_empty() {
                return Ok(token);
            }
        }
        self.api_key.clone().ok_or_else(|| {
            anyhow::anyhow!(
                "No goldapi.io access token configured; set {} or providers.goldapi.api_key",
                GOLDAPI_TOKEN_ENV
            )
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateConfig {
    pub base_url: String,
}

impl Default for ExchangeRateConfig {
    fn default() -> Self {
        ExchangeRateConfig {
            base_url: "https://api.exchangerate-api.com".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub goldapi: Option<GoldApiConfig>,
    pub exchangerate: Option<ExchangeRateConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            goldapi: Some(GoldApiConfig::default()),
            exchangerate: Some(ExchangeRateConfig::default()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Quote currency requested for the spot price.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "aurum", "aurum")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
