pub mod lookup;
pub mod resolve_batch;
pub mod resolver_context;

pub use lookup::{LookupWorker, WorkerStats};
pub use resolve_batch::{BatchReport, LookupSettings, ResolveBatchUseCase};
pub use resolver_context::BuildResolverContextUseCase;
