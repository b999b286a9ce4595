use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Failed to resolve DNS server address {address}: {reason}")]
    ResolverUnavailable { address: String, reason: String },

    #[error("Address lookup failed for {0}")]
    AddressLookup(String),

    #[error("Name lookup failed for {0}")]
    NameLookup(String),

    #[error("Invalid thread count: {0} (must be at least 1)")]
    InvalidThreadCount(usize),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Failed to spawn lookup worker: {0}")]
    WorkerSpawn(String),

    #[error("Lookup worker {0} panicked")]
    WorkerPanicked(usize),
}
