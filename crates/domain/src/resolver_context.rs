use std::net::SocketAddr;
use std::sync::Arc;

use crate::errors::DomainError;
use crate::protocol::{Protocol, SocketType};

/// Resolved description of the configured resolver.
///
/// Built once before any lookup worker starts and then shared by reference;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverContext {
    protocol: Protocol,
    endpoints: Arc<[SocketAddr]>,
    server_name: Arc<str>,
}

impl ResolverContext {
    /// Fails when `endpoints` is empty: a context always has a concrete server.
    pub fn new(
        address: &str,
        protocol: Protocol,
        endpoints: Vec<SocketAddr>,
        server_name: Arc<str>,
    ) -> Result<Self, DomainError> {
        if endpoints.is_empty() {
            return Err(DomainError::ResolverUnavailable {
                address: address.to_string(),
                reason: "no addresses returned".to_string(),
            });
        }

        Ok(Self {
            protocol,
            endpoints: endpoints.into(),
            server_name,
        })
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn socket_type(&self) -> SocketType {
        self.protocol.socket_type()
    }

    /// First address returned for the resolver.
    pub fn endpoint(&self) -> SocketAddr {
        self.endpoints[0]
    }

    pub fn endpoints(&self) -> &[SocketAddr] {
        &self.endpoints
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }
}
