// config/mod.rs
use serde::Deserialize;
use config::Config;
use std::time::Duration;

const CONFIG_FILE: &str = "config/config";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub metrics: MetricsSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Artificial delay applied to every request before routing.
    pub latency_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    pub enabled: bool,
    pub port: u16,
}

impl ServerSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Settings {
    /// Loads settings from `config/config.*`, `APP_*` variables and `PORT`.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::build(Some(CONFIG_FILE), std::env::var("PORT").ok())
    }

    pub(crate) fn build(
        file: Option<&str>,
        port: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.latency_ms", 700)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.port", 9000)?;

        if let Some(file) = file {
            builder = builder.add_source(config::File::with_name(file).required(false));
        }

        // An empty PORT counts as unset.
        let port = port.filter(|port| !port.trim().is_empty());

        let settings = builder
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_3000_when_unset() {
        let settings = Settings::build(None, None).unwrap();

        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.latency(), Duration::from_millis(700));
        assert!(!settings.metrics.enabled);
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        let settings = Settings::build(None, Some(String::new())).unwrap();

        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn port_variable_overrides_default() {
        let settings = Settings::build(None, Some("8080".to_string())).unwrap();

        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(Settings::build(None, Some("lights".to_string())).is_err());
    }
}
