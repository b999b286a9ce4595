pub mod output;
pub mod system;
