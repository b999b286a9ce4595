use std::io::{self, BufRead};
use tracing::debug;

/// Reads every input line before any lookup starts. Lines are kept verbatim,
/// so they can be echoed back exactly in `<ip>\t<hostname>` output.
pub fn read_input<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let items = reader.lines().collect::<io::Result<Vec<String>>>()?;
    debug!(items = items.len(), "Input read");
    Ok(items)
}
