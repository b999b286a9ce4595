//! Ferrous rDNS Domain Layer
pub mod config;
pub mod errors;
pub mod output_line;
pub mod protocol;
pub mod resolver_context;

pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, LookupConfig, OutputConfig, ResolverConfig,
    Schedule,
};
pub use errors::DomainError;
pub use output_line::{OutputLine, OutputMode};
pub use protocol::{Protocol, SocketType};
pub use resolver_context::ResolverContext;
