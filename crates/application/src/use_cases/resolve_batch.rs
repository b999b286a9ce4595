use ferrous_rdns_domain::{
    Config, DomainError, OutputMode, ResolverConfig, ResolverContext, Schedule,
};
use std::sync::Arc;
use std::thread;
use tracing::{error, info};

use super::lookup::{LookupWorker, WorkerStats};
use super::resolver_context::BuildResolverContextUseCase;
use crate::ports::{AddressResolver, OutputSink};
use crate::services::{partition, WorkQueue};

type WorkItems<'w> = Box<dyn Iterator<Item = &'w str> + Send + 'w>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupSettings {
    pub threads: usize,
    pub mode: OutputMode,
    pub schedule: Schedule,
}

impl LookupSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            threads: config.lookup.threads,
            mode: config.output.mode(),
            schedule: config.lookup.schedule,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub workers: usize,
    pub items: u64,
    pub resolved: u64,
    pub lines: u64,
}

/// Bulk reverse lookup over a fixed pool of OS threads.
///
/// The resolver context is built once, before any worker exists, and every
/// worker borrows it read-only. Workers are always joined before `execute`
/// returns.
pub struct ResolveBatchUseCase {
    resolver: Arc<dyn AddressResolver>,
    sink: Arc<dyn OutputSink>,
    build_context: BuildResolverContextUseCase,
}

impl ResolveBatchUseCase {
    pub fn new(resolver: Arc<dyn AddressResolver>, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            build_context: BuildResolverContextUseCase::new(Arc::clone(&resolver)),
            resolver,
            sink,
        }
    }

    pub fn execute(
        &self,
        resolver_config: &ResolverConfig,
        settings: &LookupSettings,
        items: &[String],
    ) -> Result<BatchReport, DomainError> {
        if settings.threads == 0 {
            return Err(DomainError::InvalidThreadCount(settings.threads));
        }

        let context = self.build_context.execute(resolver_config)?;

        info!(
            items = items.len(),
            threads = settings.threads,
            schedule = %settings.schedule,
            "Starting reverse lookups"
        );

        let report = match settings.schedule {
            Schedule::Static => {
                let partitions = partition(items, settings.threads)?;
                let work = partitions
                    .iter()
                    .map(|part| Box::new(part.iter().map(|ip| ip.as_str())) as WorkItems<'_>)
                    .collect();
                self.run_workers(&context, settings.mode, work)?
            }
            Schedule::Shared => {
                let queue = WorkQueue::new(items);
                let work = (0..settings.threads)
                    .map(|_| Box::new(queue.drain()) as WorkItems<'_>)
                    .collect();
                self.run_workers(&context, settings.mode, work)?
            }
        };

        info!(
            workers = report.workers,
            items = report.items,
            resolved = report.resolved,
            lines = report.lines,
            "Reverse lookups complete"
        );

        Ok(report)
    }

    fn run_workers(
        &self,
        context: &ResolverContext,
        mode: OutputMode,
        work: Vec<WorkItems<'_>>,
    ) -> Result<BatchReport, DomainError> {
        let resolver = self.resolver.as_ref();
        let sink = self.sink.as_ref();

        let (outcomes, spawn_error) = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(work.len());
            let mut spawn_error = None;

            for (id, items) in work.into_iter().enumerate() {
                let worker = LookupWorker::new(id, context, resolver, sink, mode);
                let spawned = thread::Builder::new()
                    .name(format!("rdns-worker-{}", id))
                    .spawn_scoped(scope, move || worker.run(items));

                match spawned {
                    Ok(handle) => handles.push((id, handle)),
                    Err(e) => {
                        spawn_error = Some(DomainError::WorkerSpawn(e.to_string()));
                        break;
                    }
                }
            }

            let outcomes: Vec<Result<WorkerStats, DomainError>> = handles
                .into_iter()
                .map(|(id, handle)| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(DomainError::WorkerPanicked(id)))
                })
                .collect();

            (outcomes, spawn_error)
        });

        let flushed = self.sink.flush();

        let mut report = BatchReport {
            workers: outcomes.len(),
            ..Default::default()
        };
        let mut total = WorkerStats::default();
        let mut first_error = spawn_error;

        for outcome in outcomes {
            match outcome {
                Ok(stats) => total.merge(&stats),
                Err(e) => {
                    error!(error = %e, "Lookup worker failed");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }
        flushed?;

        report.items = total.items;
        report.resolved = total.resolved;
        report.lines = total.lines;
        Ok(report)
    }
}
