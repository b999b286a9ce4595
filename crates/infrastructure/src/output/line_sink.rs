use ferrous_rdns_application::ports::OutputSink;
use ferrous_rdns_domain::{DomainError, OutputLine};
use std::io::{self, BufWriter, Stdout, Write};
use std::sync::{Mutex, MutexGuard};

/// Line writer guarded by a single mutex.
///
/// The lock is held for a whole `write_lines` call, so a batch is never split
/// by lines from another thread. No ordering between callers is implied.
pub struct LockedLineSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl LockedLineSink<BufWriter<Stdout>> {
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout()))
    }
}

impl<W: Write + Send> LockedLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> Result<W, DomainError> {
        self.writer.into_inner().map_err(|_| poisoned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, W>, DomainError> {
        self.writer.lock().map_err(|_| poisoned())
    }
}

fn poisoned() -> DomainError {
    DomainError::Output("output lock poisoned".to_string())
}

fn write_error(e: io::Error) -> DomainError {
    DomainError::Output(e.to_string())
}

impl<W: Write + Send> OutputSink for LockedLineSink<W> {
    fn write_lines(&self, lines: &[OutputLine]) -> Result<(), DomainError> {
        let mut writer = self.lock()?;
        for line in lines {
            writeln!(writer, "{}", line).map_err(write_error)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), DomainError> {
        self.lock()?.flush().map_err(write_error)
    }
}
