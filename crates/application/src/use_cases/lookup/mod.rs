pub mod worker;

pub use worker::{LookupWorker, WorkerStats};
