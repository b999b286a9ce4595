use ferrous_rdns_domain::{DomainError, OutputLine, OutputMode, ResolverContext};
use std::sync::Arc;
use tracing::debug;

use crate::ports::{AddressResolver, OutputSink};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    /// Input items processed.
    pub items: u64,
    /// Items that produced at least one hostname.
    pub resolved: u64,
    /// Output lines written.
    pub lines: u64,
}

impl WorkerStats {
    pub fn merge(&mut self, other: &WorkerStats) {
        self.items += other.items;
        self.resolved += other.resolved;
        self.lines += other.lines;
    }
}

/// Resolves one worker's share of the input, sequentially.
///
/// Lookup failures are absorbed here and only show up as missing output.
/// The only error a worker returns is a failed write to the sink.
pub struct LookupWorker<'a> {
    id: usize,
    context: &'a ResolverContext,
    resolver: &'a dyn AddressResolver,
    sink: &'a dyn OutputSink,
    mode: OutputMode,
}

impl<'a> LookupWorker<'a> {
    pub fn new(
        id: usize,
        context: &'a ResolverContext,
        resolver: &'a dyn AddressResolver,
        sink: &'a dyn OutputSink,
        mode: OutputMode,
    ) -> Self {
        Self {
            id,
            context,
            resolver,
            sink,
            mode,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn run<'i, I>(&self, items: I) -> Result<WorkerStats, DomainError>
    where
        I: IntoIterator<Item = &'i str>,
    {
        let mut stats = WorkerStats::default();

        for ip in items {
            self.process(ip, &mut stats)?;
        }

        debug!(
            worker = self.id,
            items = stats.items,
            resolved = stats.resolved,
            lines = stats.lines,
            "Lookup worker finished"
        );

        Ok(stats)
    }

    fn process(&self, ip: &str, stats: &mut WorkerStats) -> Result<(), DomainError> {
        stats.items += 1;

        let records = match self
            .resolver
            .resolve_addresses(ip, None, self.context.socket_type())
        {
            Ok(records) => records,
            Err(e) => {
                debug!(worker = self.id, ip = %ip, error = %e, "Skipping unresolvable input");
                return Ok(());
            }
        };

        let source: Arc<str> = Arc::from(ip);
        let mut batch = Vec::new();
        let mut found = 0u64;

        for record in &records {
            let hostname = match self.resolver.resolve_name(record) {
                Ok(hostname) => hostname,
                Err(e) => {
                    debug!(worker = self.id, ip = %ip, record = %record, error = %e, "Skipping address record");
                    continue;
                }
            };
            found += 1;

            match self.mode {
                OutputMode::Pairs => {
                    self.sink.write_lines(&[OutputLine::Pair {
                        ip: Arc::clone(&source),
                        hostname,
                    }])?;
                    stats.lines += 1;
                }
                OutputMode::DomainOnly => batch.push(OutputLine::Bare(hostname)),
            }
        }

        if !batch.is_empty() {
            self.sink.write_lines(&batch)?;
            stats.lines += batch.len() as u64;
        }

        if found > 0 {
            stats.resolved += 1;
        }

        Ok(())
    }
}
