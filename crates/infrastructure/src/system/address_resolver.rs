use dns_lookup::{getaddrinfo, getnameinfo, AddrInfoHints, SockType};
use ferrous_rdns_application::ports::AddressResolver;
use ferrous_rdns_domain::{DomainError, SocketType};
use std::io;
use std::net::SocketAddr;
use tracing::debug;

/// Resolver backed by the system's `getaddrinfo`/`getnameinfo`.
///
/// Reverse names therefore come from whatever the host is configured with
/// (`/etc/hosts`, nsswitch, the system DNS servers).
pub struct SystemAddressResolver {
    name_flags: i32,
}

impl SystemAddressResolver {
    pub fn new() -> Self {
        Self { name_flags: 0 }
    }

    /// When set, records without a reverse name fail instead of yielding
    /// their numeric form.
    pub fn with_name_required(mut self, required: bool) -> Self {
        self.name_flags = if required { libc::NI_NAMEREQD } else { 0 };
        self
    }
}

impl Default for SystemAddressResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn sock_type(socket_type: SocketType) -> SockType {
    match socket_type {
        SocketType::Stream => SockType::Stream,
        SocketType::Datagram => SockType::DGram,
    }
}

fn describe(error: impl Into<io::Error>) -> String {
    error.into().to_string()
}

impl AddressResolver for SystemAddressResolver {
    fn resolve_addresses(
        &self,
        host: &str,
        port: Option<u16>,
        socket_type: SocketType,
    ) -> Result<Vec<SocketAddr>, DomainError> {
        let service = port.map(|p| p.to_string());
        let hints = AddrInfoHints {
            socktype: sock_type(socket_type).into(),
            ..AddrInfoHints::default()
        };

        let infos = getaddrinfo(Some(host), service.as_deref(), Some(hints))
            .map_err(|e| DomainError::AddressLookup(format!("{}: {}", host, describe(e))))?;

        let mut addrs = Vec::new();
        for info in infos {
            match info {
                Ok(info) => addrs.push(info.sockaddr),
                Err(e) => debug!(host = %host, error = %e, "Skipping unreadable address record"),
            }
        }

        if addrs.is_empty() {
            return Err(DomainError::AddressLookup(format!(
                "{}: no address records",
                host
            )));
        }

        Ok(addrs)
    }

    fn resolve_name(&self, addr: &SocketAddr) -> Result<String, DomainError> {
        let (host, _service) = getnameinfo(addr, self.name_flags)
            .map_err(|e| DomainError::NameLookup(format!("{}: {}", addr.ip(), describe(e))))?;
        Ok(host)
    }
}
