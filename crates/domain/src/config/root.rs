use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::timeouts::TimeoutConfig;
use super::transport::TransportConfig;

const LOCAL_CONFIG: &str = "ypprobe.toml";
const SYSTEM_CONFIG: &str = "/etc/ypprobe/config.toml";

/// Main configuration structure for ypprobe
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Per-call deadlines
    #[serde(default)]
    pub timeouts: TimeoutConfig,

    /// Port discovery and datagram limits
    #[serde(default)]
    pub transport: TransportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ypprobe.toml in current directory
    /// 3. /etc/ypprobe/config.toml
    /// 4. Default configuration
    ///
    /// CLI overrides are applied on top, then the result is validated.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG).exists() {
            Self::from_file(LOCAL_CONFIG)?
        } else if std::path::Path::new(SYSTEM_CONFIG).exists() {
            Self::from_file(SYSTEM_CONFIG)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(secs) = overrides.initial_timeout {
            self.timeouts.initial_timeout = secs;
        }
        if let Some(secs) = overrides.transfer_timeout {
            self.timeouts.transfer_timeout = secs;
        }
        if let Some(port) = overrides.portmapper_port {
            self.transport.portmapper_port = port;
        }
        if let Some(port) = overrides.yp_port {
            self.transport.yp_port = Some(port);
        }
        if let Some(port) = overrides.bootparam_port {
            self.transport.bootparam_port = Some(port);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeouts.initial_timeout == 0 {
            return Err(ConfigError::Validation(
                "initial_timeout must be at least 1 second".to_string(),
            ));
        }

        if self.timeouts.transfer_timeout == 0 {
            return Err(ConfigError::Validation(
                "transfer_timeout must be at least 1 second".to_string(),
            ));
        }

        if self.transport.portmapper_port == 0 {
            return Err(ConfigError::Validation(
                "portmapper_port cannot be 0".to_string(),
            ));
        }

        for (name, port) in [
            ("yp_port", self.transport.yp_port),
            ("bootparam_port", self.transport.bootparam_port),
        ] {
            if port == Some(0) {
                return Err(ConfigError::Validation(format!("{} cannot be 0", name)));
            }
        }

        if self.transport.max_reply_size < 512 {
            return Err(ConfigError::Validation(format!(
                "max_reply_size {} is below 512 bytes",
                self.transport.max_reply_size
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub initial_timeout: Option<u64>,
    pub transfer_timeout: Option<u64>,
    pub portmapper_port: Option<u16>,
    pub yp_port: Option<u16>,
    pub bootparam_port: Option<u16>,
    pub log_level: Option<String>,
}
