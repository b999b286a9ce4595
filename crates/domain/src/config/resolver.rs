use serde::{Deserialize, Serialize};

use crate::protocol::Protocol;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Resolver host name or IP address.
    pub address: String,

    pub protocol: Protocol,

    pub port: u16,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            protocol: Protocol::Udp,
            port: 53,
        }
    }
}
