//! Configuration for the grades server.
//!
//! Layers, lowest priority first:
//! 1. built-in defaults
//! 2. YAML file (`--config`)
//! 3. environment variables prefixed with `GRADES__` (`__` separates nesting,
//!    e.g. `GRADES__SERVER__LISTEN_ADDR`)
//! 4. CLI overrides

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 50052));

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "GRADES__";

/// Top-level configuration of the grades server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct GradesConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// gRPC listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Listen address, e.g. `0.0.0.0:50052` or `127.0.0.1:0` for an ephemeral port.
    pub listen_addr: String,
    /// Channel capacity between the store snapshot and a grade stream.
    pub stream_buffer: usize,
    /// How long to wait for in-flight calls after shutdown is requested.
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            stream_buffer: 16,
            shutdown_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if `listen_addr` is not a valid socket address.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listen_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid listen_addr '{}'", self.listen_addr))
    }

    #[must_use]
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// CLI values that override the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub listen_addr: Option<String>,
    /// Verbosity count (`-v` info, `-vv` debug, `-vvv` trace).
    pub verbose: u8,
}

impl GradesConfig {
    /// Load configuration from defaults, an optional YAML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or any layer fails to
    /// deserialize.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load grades configuration")
    }

    /// Apply CLI overrides on top of the loaded layers.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(addr) = &cli.listen_addr {
            self.server.listen_addr.clone_from(addr);
        }

        let level = match cli.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
    }

    /// Effective configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to render configuration")
    }
}
