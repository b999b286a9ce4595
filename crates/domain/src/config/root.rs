use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::{LookupConfig, Schedule};
use super::output::OutputConfig;
use super::resolver::ResolverConfig;
use crate::protocol::Protocol;

/// Main configuration structure for Ferrous rDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Resolver the run is validated against
    pub resolver: ResolverConfig,

    /// Worker pool and lookup behaviour
    pub lookup: LookupConfig,

    pub output: OutputConfig,

    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-rdns.toml in current directory
    /// 3. /etc/ferrous-rdns/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(threads) = overrides.threads {
            self.lookup.threads = threads;
        }
        if let Some(address) = overrides.resolver_address {
            self.resolver.address = address;
        }
        if let Some(protocol) = overrides.protocol {
            self.resolver.protocol = protocol;
        }
        if let Some(port) = overrides.port {
            self.resolver.port = port;
        }
        if overrides.domain_only {
            self.output.domain_only = true;
        }
        if overrides.name_required {
            self.lookup.name_required = true;
        }
        if let Some(schedule) = overrides.schedule {
            self.lookup.schedule = schedule;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookup.threads == 0 {
            return Err(ConfigError::Validation(
                "Thread count must be at least 1".to_string(),
            ));
        }

        if self.resolver.address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No resolver address configured (use -r)".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("ferrous-rdns.toml").exists() {
            Some("ferrous-rdns.toml".to_string())
        } else if std::path::Path::new("/etc/ferrous-rdns/config.toml").exists() {
            Some("/etc/ferrous-rdns/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
///
/// Boolean switches can only turn a feature on; a file setting of `true`
/// is never cleared from the command line.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub threads: Option<usize>,
    pub resolver_address: Option<String>,
    pub protocol: Option<Protocol>,
    pub port: Option<u16>,
    pub domain_only: bool,
    pub name_required: bool,
    pub schedule: Option<Schedule>,
    pub log_level: Option<String>,
}
