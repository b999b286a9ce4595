use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Number of lookup workers, fixed for the whole run.
    pub threads: usize,

    pub schedule: Schedule,

    /// Drop address records with no reverse name instead of printing the numeric form.
    pub name_required: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            threads: 8,
            schedule: Schedule::Static,
            name_required: false,
        }
    }
}

/// How input items are handed to workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    /// Round-robin split decided up front: item `i` goes to worker `i % threads`.
    #[default]
    Static,

    /// Workers pull the next unclaimed item from a shared queue.
    Shared,
}

impl Schedule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Shared => "shared",
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schedule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "shared" => Ok(Self::Shared),
            other => Err(ConfigError::Validation(format!(
                "Unknown schedule '{}' (expected static or shared)",
                other
            ))),
        }
    }
}
