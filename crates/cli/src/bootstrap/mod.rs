mod config;
mod input;
mod logging;

pub use config::load_config;
pub use input::read_input;
pub use logging::init_logging;
