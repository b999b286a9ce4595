use ferrous_rdns_domain::{DomainError, SocketType};
use std::net::SocketAddr;

/// Blocking address and name resolution.
///
/// Calls block the current thread for as long as the underlying lookup
/// takes; callers run them on dedicated worker threads.
pub trait AddressResolver: Send + Sync {
    /// Resolves `host` (a name or a textual IP) into address records, in the
    /// order the system returned them.
    fn resolve_addresses(
        &self,
        host: &str,
        port: Option<u16>,
        socket_type: SocketType,
    ) -> Result<Vec<SocketAddr>, DomainError>;

    /// Derives a hostname for one address record.
    fn resolve_name(&self, addr: &SocketAddr) -> Result<String, DomainError>;
}
