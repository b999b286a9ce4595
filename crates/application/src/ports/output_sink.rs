use ferrous_rdns_domain::{DomainError, OutputLine};

pub trait OutputSink: Send + Sync {
    /// Writes `lines` as one uninterrupted unit: no line from another caller
    /// may appear between them.
    fn write_lines(&self, lines: &[OutputLine]) -> Result<(), DomainError>;

    fn flush(&self) -> Result<(), DomainError>;
}
