use std::env;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the screening tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub registry: RegistryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &optional_var("APP_ENV")?.unwrap_or_else(|| "development".to_string()),
        );

        let log_level = optional_var("APP_LOG_LEVEL")?.unwrap_or_else(|| "info".to_string());

        let path = optional_var("FFN_REGISTRY_PATH")?.map(PathBuf::from);
        let license_status = optional_var("FFN_LICENSE_STATUS")?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            registry: RegistryConfig {
                path,
                license_status,
            },
        })
    }
}

fn optional_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue { key }),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { key }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Location and reported license of the frequent flyer registry snapshot.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    pub path: Option<PathBuf>,
    pub license_status: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} is set but empty")]
    EmptyValue { key: &'static str },
    #[error("{key} must be valid unicode")]
    NotUnicode { key: &'static str },
}
