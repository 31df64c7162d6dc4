//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use member_core::MemberError;
use std::path::Path;
use tracing::{debug, info};

/// Configuration loaded once at startup from layered sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `MEMBER__` prefix (e.g. `MEMBER__REDIS__URL`)
    pub fn new(config_dir: impl Into<String>) -> Result<Self, MemberError> {
        let config = Self::load_config(&config_dir.into())?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, MemberError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, MemberError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("MEMBER_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("MEMBER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_member_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_member_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Validates the configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), MemberError> {
    if config.database.url.is_empty() {
        return Err(MemberError::Configuration("Database URL is required".to_string()));
    }

    if config.redis.enabled && config.redis.url.is_empty() {
        return Err(MemberError::Configuration(
            "Redis URL is required when Redis is enabled".to_string(),
        ));
    }

    if config.cache.list_ttl_secs == 0 || config.cache.entry_ttl_secs == 0 {
        return Err(MemberError::Configuration(
            "Cache TTLs must be greater than zero".to_string(),
        ));
    }

    if config.cache.scan_count == 0 {
        return Err(MemberError::Configuration(
            "Cache scan count must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn config_error_to_member_error(err: ConfigError) -> MemberError {
    MemberError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CacheConfig, ServerConfig};
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.cache.entry_ttl(), Duration::from_secs(100));
        assert!(config.redis.enabled);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let mut config = AppConfig::default();
        config.cache = CacheConfig {
            entry_ttl_secs: 0,
            ..CacheConfig::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(MemberError::Configuration(_))
        ));
    }

    #[test]
    fn test_zero_scan_count_is_rejected() {
        let mut config = AppConfig::default();
        config.cache.scan_count = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_database_url_is_rejected() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_loads_default_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            r#"
            [cache]
            list_ttl_secs = 30
            scan_count = 10

            [server]
            port = 9000
            "#,
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy().to_string()).unwrap();
        let config = loader.get();

        assert_eq!(config.cache.list_ttl_secs, 30);
        assert_eq!(config.cache.scan_count, 10);
        // Untouched fields keep their defaults
        assert_eq!(config.cache.entry_ttl_secs, 100);
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_invalid_file_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.toml"), "[cache]\nentry_ttl_secs = 0\n").unwrap();

        let result = ConfigLoader::new(dir.path().to_string_lossy().to_string());
        assert!(matches!(result, Err(MemberError::Configuration(_))));
    }
}
