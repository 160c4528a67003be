use async_trait::async_trait;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use ypprobe_application::ports::{BootParamServer, EntrySink, HostResolver, YpServer};
use ypprobe_domain::{
    DomainError, KeyValReply, MapListReply, MapRequest, NisDomain, RpcStatus, WhoamiReply,
    WhoamiRequest, YpStatus,
};

enum Fault {
    Error(DomainError),
    Stall,
}

/// Serves one scripted map in order and records every request it sees.
#[derive(Clone)]
pub struct MockYpServer {
    name: String,
    served: Arc<Mutex<bool>>,
    entries: Arc<Mutex<Vec<(Vec<u8>, Vec<u8>)>>>,
    end_status: Arc<Mutex<YpStatus>>,
    map_list: Arc<Mutex<MapListReply>>,
    requests: Arc<Mutex<Vec<MapRequest>>>,
    domain_checks: Arc<Mutex<usize>>,
    map_list_calls: Arc<Mutex<usize>>,
    fault_at: Arc<Mutex<Option<(usize, Fault)>>>,
}

impl MockYpServer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            served: Arc::new(Mutex::new(true)),
            entries: Arc::new(Mutex::new(Vec::new())),
            end_status: Arc::new(Mutex::new(YpStatus::NoMore)),
            map_list: Arc::new(Mutex::new(MapListReply {
                status: YpStatus::True,
                maps: Vec::new(),
            })),
            requests: Arc::new(Mutex::new(Vec::new())),
            domain_checks: Arc::new(Mutex::new(0)),
            map_list_calls: Arc::new(Mutex::new(0)),
            fault_at: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_entries(self, entries: &[(&str, &str)]) -> Self {
        *self.entries.lock().unwrap() = entries
            .iter()
            .map(|(k, v)| (k.as_bytes().to_vec(), v.as_bytes().to_vec()))
            .collect();
        self
    }

    pub fn not_serving(self) -> Self {
        *self.served.lock().unwrap() = false;
        self
    }

    /// Status returned once the scripted entries run out.
    pub fn ending_with(self, status: YpStatus) -> Self {
        *self.end_status.lock().unwrap() = status;
        self
    }

    pub fn with_map_list(self, status: YpStatus, maps: &[&str]) -> Self {
        *self.map_list.lock().unwrap() = MapListReply {
            status,
            maps: maps.iter().map(|m| m.to_string()).collect(),
        };
        self
    }

    /// Fails the fetch call with the given zero-based index.
    pub fn failing_fetch_at(self, index: usize, error: DomainError) -> Self {
        *self.fault_at.lock().unwrap() = Some((index, Fault::Error(error)));
        self
    }

    /// Never answers the fetch call with the given zero-based index.
    pub fn stalling_fetch_at(self, index: usize) -> Self {
        *self.fault_at.lock().unwrap() = Some((index, Fault::Stall));
        self
    }

    pub fn requests(&self) -> Vec<MapRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn domain_checks(&self) -> usize {
        *self.domain_checks.lock().unwrap()
    }

    pub fn map_list_calls(&self) -> usize {
        *self.map_list_calls.lock().unwrap()
    }

    fn fault_for(&self, index: usize) -> Option<Option<DomainError>> {
        match &*self.fault_at.lock().unwrap() {
            Some((at, Fault::Error(e))) if *at == index => Some(Some(e.clone())),
            Some((at, Fault::Stall)) if *at == index => Some(None),
            _ => None,
        }
    }
}

#[async_trait]
impl YpServer for MockYpServer {
    fn server_name(&self) -> &str {
        &self.name
    }

    async fn serves_domain(
        &self,
        _domain: &NisDomain,
        _timeout: Duration,
    ) -> Result<bool, DomainError> {
        *self.domain_checks.lock().unwrap() += 1;
        Ok(*self.served.lock().unwrap())
    }

    async fn fetch_entry(
        &self,
        request: &MapRequest,
        _timeout: Duration,
    ) -> Result<KeyValReply, DomainError> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len() - 1
        };

        match self.fault_for(index) {
            Some(Some(error)) => return Err(error),
            Some(None) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                return Err(DomainError::Rpc {
                    server: self.name.clone(),
                    status: RpcStatus::TimedOut,
                });
            }
            None => {}
        }

        let entries = self.entries.lock().unwrap();
        let position = match request.key() {
            None => 0,
            Some(key) => match entries.iter().position(|(k, _)| k.as_slice() == key) {
                Some(found) => found + 1,
                None => {
                    return Ok(KeyValReply {
                        status: YpStatus::NoKey,
                        value: Vec::new(),
                        key: Vec::new(),
                    })
                }
            },
        };

        Ok(match entries.get(position) {
            Some((key, value)) => KeyValReply {
                status: YpStatus::True,
                value: value.clone(),
                key: key.clone(),
            },
            None => KeyValReply {
                status: *self.end_status.lock().unwrap(),
                value: Vec::new(),
                key: Vec::new(),
            },
        })
    }

    async fn map_list(
        &self,
        _domain: &NisDomain,
        _timeout: Duration,
    ) -> Result<MapListReply, DomainError> {
        *self.map_list_calls.lock().unwrap() += 1;
        Ok(self.map_list.lock().unwrap().clone())
    }
}

#[derive(Clone)]
pub struct MockBootParamServer {
    name: String,
    reply: Arc<Mutex<Result<WhoamiReply, DomainError>>>,
    requests: Arc<Mutex<Vec<WhoamiRequest>>>,
}

impl MockBootParamServer {
    pub fn answering(name: &str, reply: WhoamiReply) -> Self {
        Self {
            name: name.to_string(),
            reply: Arc::new(Mutex::new(Ok(reply))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(name: &str, error: DomainError) -> Self {
        Self {
            name: name.to_string(),
            reply: Arc::new(Mutex::new(Err(error))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<WhoamiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BootParamServer for MockBootParamServer {
    fn server_name(&self) -> &str {
        &self.name
    }

    async fn whoami(
        &self,
        request: &WhoamiRequest,
        _timeout: Duration,
    ) -> Result<WhoamiReply, DomainError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.lock().unwrap().clone()
    }
}

#[derive(Clone, Default)]
pub struct MockHostResolver {
    hosts: Arc<Mutex<HashMap<String, Ipv4Addr>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(self, name: &str, ip: Ipv4Addr) -> Self {
        self.hosts.lock().unwrap().insert(name.to_string(), ip);
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, DomainError> {
        self.lookups.lock().unwrap().push(host.to_string());
        self.hosts
            .lock()
            .unwrap()
            .get(host)
            .copied()
            .ok_or_else(|| DomainError::UnknownHost(host.to_string()))
    }
}

#[derive(Default)]
pub struct VecSink {
    pub entries: Vec<(String, String)>,
}

impl EntrySink for VecSink {
    fn emit(&mut self, key: &[u8], value: &[u8]) -> Result<(), DomainError> {
        self.entries.push((
            String::from_utf8_lossy(key).into_owned(),
            String::from_utf8_lossy(value).into_owned(),
        ));
        Ok(())
    }
}
