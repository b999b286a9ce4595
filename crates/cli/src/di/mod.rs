use ferrous_rdns_application::ports::{AddressResolver, OutputSink};
use ferrous_rdns_application::use_cases::ResolveBatchUseCase;
use ferrous_rdns_domain::Config;
use ferrous_rdns_infrastructure::output::LockedLineSink;
use ferrous_rdns_infrastructure::system::SystemAddressResolver;
use std::sync::Arc;
use tracing::debug;

pub struct LookupServices {
    pub resolve_batch: ResolveBatchUseCase,
}

impl LookupServices {
    pub fn new(config: &Config) -> Self {
        debug!(
            name_required = config.lookup.name_required,
            "Initializing system resolver and stdout sink"
        );

        let resolver: Arc<dyn AddressResolver> = Arc::new(
            SystemAddressResolver::new().with_name_required(config.lookup.name_required),
        );
        let sink: Arc<dyn OutputSink> = Arc::new(LockedLineSink::stdout());

        Self {
            resolve_batch: ResolveBatchUseCase::new(resolver, sink),
        }
    }
}
