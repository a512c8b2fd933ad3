//! Application configuration management.
//!
//! The whole service is configured from one TOML document. It is parsed once at
//! startup, checked strictly (unknown, missing or mistyped keys are errors) and
//! then validated semantically. Any failure is fatal for the server process.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the configuration document.
pub const CONFIG_PATH_ENV: &str = "KONTOR_CONFIG";

/// Configuration document used when `KONTOR_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/kontor.toml";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document could not be read or did not match the schema.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value has the right type but an unacceptable value.
    #[error("invalid configuration value for `{field}`: {reason}")]
    Invalid {
        /// Dotted key of the offending value.
        field: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Auth gate configuration.
    pub auth: AuthConfig,
    /// Client-facing UI slice.
    pub ui: UiConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Returns the `host:port` socket address string.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://data/kontor.sqlite?mode=rwc`.
    pub url: String,
    /// Apply pending migrations when the server starts.
    pub run_migrations: bool,
}

/// Auth gate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Whether requests must identify a user via `x-user-id`.
    pub enabled: bool,
    /// Minimum accepted password length for signup and password changes.
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    /// Permissive settings: the gate is off.
    fn default() -> Self {
        Self {
            enabled: false,
            min_password_length: 8,
        }
    }
}

/// UI slice consumed by the frontend.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Application title.
    pub title: String,
    /// Color theme.
    pub theme: ThemeConfig,
    /// Navigation entries, in display order.
    pub navigation: Vec<NavigationItem>,
}

/// Color theme.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Primary color as `#rrggbb`.
    pub primary: String,
    /// Secondary color as `#rrggbb`.
    pub secondary: String,
    /// Light or dark mode.
    pub mode: ThemeMode,
}

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background.
    Light,
    /// Dark background.
    Dark,
}

/// A navigation entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationItem {
    /// Display label.
    pub label: String,
    /// Client route, starting with `/`.
    pub path: String,
}

impl AppConfig {
    /// Loads configuration from the TOML document and environment overrides.
    ///
    /// The document path is taken from `KONTOR_CONFIG` (default
    /// `config/kontor.toml`). Variables of the form `KONTOR__SERVER__PORT`
    /// override single keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing, does not match the schema,
    /// or fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let builder = config::Config::builder()
            .add_source(config::File::new(&path, config::FileFormat::Toml).required(true))
            .add_source(
                config::Environment::with_prefix("KONTOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Parses and validates a TOML document without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not match the schema or fails validation.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Fixed configuration for harnesses that run without a document.
    ///
    /// Uses the permissive [`AuthConfig::default`] and an in-memory database.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                run_migrations: true,
            },
            auth: AuthConfig::default(),
            ui: UiConfig {
                title: "Kontor".to_string(),
                theme: ThemeConfig {
                    primary: "#1f6feb".to_string(),
                    secondary: "#8250df".to_string(),
                    mode: ThemeMode::Light,
                },
                navigation: vec![NavigationItem {
                    label: "Dashboard".to_string(),
                    path: "/".to_string(),
                }],
            },
        }
    }

    /// Checks value-level rules the schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::invalid("server.host", "must not be empty"));
        }
        if self.server.port == 0 {
            return Err(ConfigError::invalid("server.port", "must not be 0"));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::invalid("database.url", "must not be empty"));
        }
        if self.auth.min_password_length < 4 {
            return Err(ConfigError::invalid(
                "auth.min_password_length",
                "must be at least 4",
            ));
        }
        if self.ui.title.trim().is_empty() {
            return Err(ConfigError::invalid("ui.title", "must not be empty"));
        }
        for (field, color) in [
            ("ui.theme.primary", &self.ui.theme.primary),
            ("ui.theme.secondary", &self.ui.theme.secondary),
        ] {
            if !is_hex_color(color) {
                return Err(ConfigError::invalid(field, "expected a #rrggbb color"));
            }
        }

        let mut seen = Vec::with_capacity(self.ui.navigation.len());
        for item in &self.ui.navigation {
            if item.label.trim().is_empty() {
                return Err(ConfigError::invalid("ui.navigation.label", "must not be empty"));
            }
            if !item.path.starts_with('/') {
                return Err(ConfigError::invalid(
                    "ui.navigation.path",
                    format!("`{}` must start with /", item.path),
                ));
            }
            if seen.contains(&item.path.as_str()) {
                return Err(ConfigError::invalid(
                    "ui.navigation.path",
                    format!("`{}` is listed twice", item.path),
                ));
            }
            seen.push(item.path.as_str());
        }

        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
