//! # Server Configuration
//!
//! Listening configuration for the HTTP server. Values come from a
//! TOML file when `--config` is given; CLI flags take precedence over
//! the file, and compiled-in defaults fill the rest.
//!
//! ```toml
//! # praxis.toml
//! host = "0.0.0.0"
//! port = 4000
//! ```

use praxis_core::PraxisError;
use serde::Deserialize;
use std::path::Path;

/// Default listening host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 4000;

/// Server listening configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, PraxisError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PraxisError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        toml::from_str(&contents)
            .map_err(|e| PraxisError::Config(format!("cannot parse '{}': {}", path.display(), e)))
    }

    /// Apply CLI overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// The bind address in `host:port` form.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================
