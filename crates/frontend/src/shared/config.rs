//! Frontend configuration
//!
//! The configuration is embedded into the wasm binary as TOML and parsed once
//! on first access. Parse failures fall back to built-in defaults.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub lists: ListsConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Port of the REST API on the same host that served the app
    pub port: u16,
    /// Path prefix prepended to every endpoint
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsConfig {
    pub page_size: usize,
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// localStorage key holding the session user JSON
    pub user_key: String,
    /// localStorage key receiving the last created sale
    pub data_venta_key: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/api"

[lists]
page_size = 10
search_debounce_ms = 300

[storage]
user_key = "user"
data_venta_key = "data_venta"
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                port: 3000,
                prefix: "/api".to_string(),
            },
            lists: ListsConfig {
                page_size: 10,
                search_debounce_ms: 300,
            },
            storage: StorageConfig {
                user_key: "user".to_string(),
                data_venta_key: "data_venta".to_string(),
            },
        }
    }
}

/// Parse a configuration document
pub fn parse_config(source: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(source)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match parse_config(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::warn!("Embedded config is invalid, using defaults: {}", e);
        AppConfig::default()
    }
});

/// Process-wide configuration
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.lists.page_size, 10);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[api]\nport = 8080\nprefix = \"\"").is_err());
    }
}
