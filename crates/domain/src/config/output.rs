use serde::{Deserialize, Serialize};

use crate::output_line::OutputMode;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print bare hostnames grouped per source IP instead of `<ip>\t<hostname>`.
    pub domain_only: bool,
}

impl OutputConfig {
    pub fn mode(&self) -> OutputMode {
        OutputMode::from_domain_only(self.domain_only)
    }
}
