use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `<ip>\t<hostname>`, one line per resolved name as soon as it is known.
    #[default]
    Pairs,
    /// Bare `<hostname>` lines, flushed together per source IP.
    DomainOnly,
}

impl OutputMode {
    pub fn from_domain_only(domain_only: bool) -> Self {
        if domain_only {
            Self::DomainOnly
        } else {
            Self::Pairs
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Pair { ip: Arc<str>, hostname: String },
    Bare(String),
}

impl OutputLine {
    pub fn hostname(&self) -> &str {
        match self {
            Self::Pair { hostname, .. } | Self::Bare(hostname) => hostname,
        }
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair { ip, hostname } => write!(f, "{}\t{}", ip, hostname),
            Self::Bare(hostname) => f.write_str(hostname),
        }
    }
}
