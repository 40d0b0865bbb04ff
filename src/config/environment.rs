//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables son
//! opcionales y tienen un valor por defecto para desarrollo local.

use std::env;
use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("LOG_LEVEL must be one of trace/debug/info/warn/error, got '{0}'")]
    InvalidLogLevel(String),
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// `["*"]` significa cualquier origen
    pub cors_origins: Vec<String>,
    /// Semilla fija para la simulación (tests / demos reproducibles)
    pub simulation_seed: Option<u64>,
    pub log_level: Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: vec!["*".to_string()],
            simulation_seed: None,
            log_level: Level::DEBUG,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Leer la configuración desde una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);
        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "PORT",
                    value,
                })?,
            None => defaults.port,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(value) => parse_origins(&value),
            None => defaults.cors_origins,
        };

        let simulation_seed = match lookup("SIMULATION_SEED") {
            Some(value) => Some(value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                name: "SIMULATION_SEED",
                value,
            })?),
            None => None,
        };

        let explicit_level = match lookup("LOG_LEVEL") {
            Some(value) => Some(
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidLogLevel(value))?,
            ),
            None => None,
        };

        let mut config = Self {
            environment,
            port,
            host,
            cors_origins,
            simulation_seed,
            log_level: defaults.log_level,
        };
        config.log_level = match explicit_level {
            Some(level) => level,
            None if config.is_development() => Level::DEBUG,
            None => Level::INFO,
        };

        Ok(config)
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// CORS abierto a cualquier origen
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
