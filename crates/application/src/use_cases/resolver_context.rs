use ferrous_rdns_domain::{DomainError, ResolverConfig, ResolverContext};
use std::sync::Arc;
use tracing::{debug, info};

use crate::ports::AddressResolver;

pub struct BuildResolverContextUseCase {
    resolver: Arc<dyn AddressResolver>,
}

impl BuildResolverContextUseCase {
    pub fn new(resolver: Arc<dyn AddressResolver>) -> Self {
        Self { resolver }
    }

    /// Resolves the configured resolver host/port using the socket type of its
    /// protocol. Any failure is fatal for the run and is not retried.
    pub fn execute(&self, config: &ResolverConfig) -> Result<ResolverContext, DomainError> {
        let target = format!("{}:{}", config.address, config.port);
        let socket_type = config.protocol.socket_type();

        debug!(resolver = %target, protocol = %config.protocol, "Resolving DNS server address");

        let endpoints = self
            .resolver
            .resolve_addresses(&config.address, Some(config.port), socket_type)
            .map_err(|e| unavailable(&target, e))?;

        let first = endpoints.first().copied().ok_or_else(|| {
            DomainError::ResolverUnavailable {
                address: target.clone(),
                reason: "no addresses returned".to_string(),
            }
        })?;

        let server_name = self.resolver.resolve_name(&first).unwrap_or_else(|e| {
            debug!(endpoint = %first, error = %e, "DNS server has no reverse name");
            first.ip().to_string()
        });

        let context = ResolverContext::new(
            &target,
            config.protocol,
            endpoints,
            Arc::from(server_name),
        )?;

        info!(
            resolver = %target,
            endpoint = %context.endpoint(),
            server_name = %context.server_name(),
            protocol = %context.protocol(),
            "DNS server address resolved"
        );

        Ok(context)
    }
}

fn unavailable(target: &str, error: DomainError) -> DomainError {
    match error {
        DomainError::ResolverUnavailable { .. } => error,
        other => DomainError::ResolverUnavailable {
            address: target.to_string(),
            reason: other.to_string(),
        },
    }
}
