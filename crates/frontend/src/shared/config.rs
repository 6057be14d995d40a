use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub pedidos: PedidosConfig,
    pub whatsapp: WhatsappConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend root; empty means "same host as the page, port 8000"
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PedidosConfig {
    pub page_size: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WhatsappConfig {
    pub send_url: String,
    pub country_prefix: String,
    pub min_digits: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub auto_close_ms: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[pedidos]
page_size = 10

[whatsapp]
send_url = "https://api.whatsapp.com/send"
country_prefix = "57"
min_digits = 10

[notifications]
auto_close_ms = 3000
"#;

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            pedidos: PedidosConfig { page_size: 10 },
            whatsapp: WhatsappConfig {
                send_url: "https://api.whatsapp.com/send".to_string(),
                country_prefix: "57".to_string(),
                min_digits: 10,
            },
            notifications: NotificationsConfig {
                auto_close_ms: 3000,
            },
        }
    }
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration
///
/// Search order:
/// 1. `PEDIDOS_CONFIG` set at build time (a full TOML document)
/// 2. Falls back to embedded default config
pub fn load_config() -> Config {
    if let Some(contents) = option_env!("PEDIDOS_CONFIG") {
        match parse_config(contents) {
            Ok(config) => {
                log::info!("Using build-time configuration override");
                return config;
            }
            Err(e) => log::warn!("Ignoring PEDIDOS_CONFIG: {}", e),
        }
    }

    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded configuration is invalid: {}", e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pedidos.page_size, 10);
        assert_eq!(config.whatsapp.country_prefix, "57");
    }

    #[test]
    fn test_base_url_may_be_omitted() {
        let config = parse_config(
            r#"
            [api]
            [pedidos]
            page_size = 25
            [whatsapp]
            send_url = "https://example.test/send"
            country_prefix = "57"
            min_digits = 10
            [notifications]
            auto_close_ms = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.pedidos.page_size, 25);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(parse_config("[pedidos]\npage_size = \"diez\"").is_err());
    }
}
