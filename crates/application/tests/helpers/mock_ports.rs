#![allow(dead_code)]

use ferrous_rdns_application::ports::{AddressResolver, OutputSink};
use ferrous_rdns_domain::{DomainError, OutputLine, SocketType};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCall {
    pub host: String,
    pub port: Option<u16>,
    pub socket_type: SocketType,
}

/// In-memory resolver: hosts map to address records, records map to names.
/// Anything not registered fails the way the system resolver would.
#[derive(Clone, Default)]
pub struct MockAddressResolver {
    records: Arc<RwLock<HashMap<String, Vec<SocketAddr>>>>,
    names: Arc<RwLock<HashMap<SocketAddr, String>>>,
    address_calls: Arc<Mutex<Vec<AddressCall>>>,
    name_calls: Arc<Mutex<Vec<SocketAddr>>>,
}

impl MockAddressResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, host: &str, records: &[&str]) -> Self {
        let parsed = records.iter().map(|r| r.parse().unwrap()).collect();
        self.records.write().unwrap().insert(host.to_string(), parsed);
        self
    }

    pub fn with_name(self, record: &str, name: &str) -> Self {
        self.names
            .write()
            .unwrap()
            .insert(record.parse().unwrap(), name.to_string());
        self
    }

    /// Registers `ip` with a single record `ip:0` whose name is `name`.
    pub fn with_host(self, ip: &str, name: &str) -> Self {
        let record = format!("{}:0", ip);
        self.with_records(ip, &[record.as_str()]).with_name(&record, name)
    }

    /// Registers a resolver endpoint for `host:port`.
    pub fn with_resolver(self, host: &str, port: u16, endpoint: &str, name: &str) -> Self {
        self.records
            .write()
            .unwrap()
            .insert(format!("{}#{}", host, port), vec![endpoint.parse().unwrap()]);
        self.with_name(endpoint, name)
    }

    pub fn address_calls(&self) -> Vec<AddressCall> {
        self.address_calls.lock().unwrap().clone()
    }

    pub fn lookup_calls(&self) -> Vec<AddressCall> {
        self.address_calls()
            .into_iter()
            .filter(|c| c.port.is_none())
            .collect()
    }

    pub fn name_calls(&self) -> Vec<SocketAddr> {
        self.name_calls.lock().unwrap().clone()
    }
}

impl AddressResolver for MockAddressResolver {
    fn resolve_addresses(
        &self,
        host: &str,
        port: Option<u16>,
        socket_type: SocketType,
    ) -> Result<Vec<SocketAddr>, DomainError> {
        self.address_calls.lock().unwrap().push(AddressCall {
            host: host.to_string(),
            port,
            socket_type,
        });

        let key = match port {
            Some(port) => format!("{}#{}", host, port),
            None => host.to_string(),
        };

        self.records
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| DomainError::AddressLookup(format!("{}: Name or service not known", host)))
    }

    fn resolve_name(&self, addr: &SocketAddr) -> Result<String, DomainError> {
        self.name_calls.lock().unwrap().push(*addr);

        self.names
            .read()
            .unwrap()
            .get(addr)
            .cloned()
            .ok_or_else(|| DomainError::NameLookup(addr.to_string()))
    }
}

/// Sink that records every `write_lines` call as one batch.
#[derive(Clone, Default)]
pub struct RecordingSink {
    batches: Arc<Mutex<Vec<Vec<OutputLine>>>>,
    fail_writes: Arc<AtomicBool>,
    flushes: Arc<Mutex<u32>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let sink = Self::default();
        sink.fail_writes.store(true, Ordering::SeqCst);
        sink
    }

    pub fn batches(&self) -> Vec<Vec<OutputLine>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn rendered(&self) -> Vec<String> {
        self.batches()
            .into_iter()
            .flatten()
            .map(|line| line.to_string())
            .collect()
    }

    pub fn flush_count(&self) -> u32 {
        *self.flushes.lock().unwrap()
    }
}

impl OutputSink for RecordingSink {
    fn write_lines(&self, lines: &[OutputLine]) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Output("Broken pipe".to_string()));
        }
        self.batches.lock().unwrap().push(lines.to_vec());
        Ok(())
    }

    fn flush(&self) -> Result<(), DomainError> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}
