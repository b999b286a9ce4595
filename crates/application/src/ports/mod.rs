mod address_resolver;
mod output_sink;

pub use address_resolver::AddressResolver;
pub use output_sink::OutputSink;
