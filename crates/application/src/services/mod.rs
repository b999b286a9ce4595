pub mod partitioner;
pub mod work_queue;

pub use partitioner::partition;
pub use work_queue::WorkQueue;
