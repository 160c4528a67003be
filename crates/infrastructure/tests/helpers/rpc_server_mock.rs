use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;
use ypprobe_infrastructure::rpc::xdr::{get_opaque, get_string, get_u32, put_opaque, put_string};

const PMAP_PROG: u32 = 100000;
const YP_PROG: u32 = 100004;
const BOOTPARAM_PROG: u32 = 100026;

const YP_TRUE: i32 = 1;
const YP_NOMORE: i32 = 2;
const YP_NOMAP: i32 = -1;
const YP_NODOM: i32 = -2;
const YP_NOKEY: i32 = -3;

const SUCCESS: u32 = 0;
const PROG_UNAVAIL: u32 = 1;
const PROC_UNAVAIL: u32 = 3;

/// What the mock host runs. Portmapper, ypserv and rpc.bootparamd all share
/// one UDP port; GETPORT hands that port out for every registered program.
#[derive(Clone, Default)]
pub struct MockRpcServerConfig {
    pub domains: Vec<String>,
    pub maps: HashMap<String, Vec<(String, String)>>,
    pub map_list: Vec<String>,
    pub whoami: Option<(String, String, [u8; 4])>,
    pub yp_registered: bool,
    pub bootparam_registered: bool,
    /// Precede every ypserv reply with one carrying a different xid.
    pub stale_reply_first: bool,
    /// Stop answering ypserv after this many FIRST/NEXT calls.
    pub silent_after_fetches: Option<usize>,
}

impl MockRpcServerConfig {
    pub fn yp(domain: &str) -> Self {
        Self {
            domains: vec![domain.to_string()],
            yp_registered: true,
            ..Self::default()
        }
    }

    pub fn with_map(mut self, name: &str, entries: &[(&str, &str)]) -> Self {
        self.maps.insert(
            name.to_string(),
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    pub fn with_map_list(mut self, maps: &[&str]) -> Self {
        self.map_list = maps.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn bootparam(client_name: &str, domain_name: &str, router: [u8; 4]) -> Self {
        Self {
            whoami: Some((client_name.to_string(), domain_name.to_string(), router)),
            bootparam_registered: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: u32,
    pub procedure: u32,
    pub args: Vec<u8>,
}

pub struct MockRpcServer {
    addr: SocketAddr,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockRpcServer {
    pub async fn start(config: MockRpcServerConfig) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let calls = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let recorded = Arc::clone(&calls);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 8800];
            let mut fetches = 0usize;

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Some((xid, call)) = parse_call(Bytes::copy_from_slice(&buf[..len])) else {
                            continue;
                        };
                        recorded.lock().unwrap().push(call.clone());

                        if call.program == YP_PROG && matches!(call.procedure, 4 | 5) {
                            fetches += 1;
                            if config.silent_after_fetches.is_some_and(|n| fetches > n) {
                                continue;
                            }
                        }

                        if call.program == YP_PROG && config.stale_reply_first {
                            let stale = reply(xid ^ 0x8000_0000, SUCCESS, &[0, 0, 0, 0]);
                            let _ = socket.send_to(&stale, peer).await;
                        }

                        let (stat, results) = answer(&config, addr.port(), &call);
                        let _ = socket.send_to(&reply(xid, stat, &results), peer).await;
                    }
                }
            }
        });

        Ok(Self {
            addr,
            calls,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, program: u32) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.program == program)
            .collect()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockRpcServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn parse_call(mut buf: Bytes) -> Option<(u32, RecordedCall)> {
    let xid = get_u32(&mut buf).ok()?;
    let mtype = get_u32(&mut buf).ok()?;
    let rpcvers = get_u32(&mut buf).ok()?;
    if mtype != 0 || rpcvers != 2 {
        return None;
    }
    let program = get_u32(&mut buf).ok()?;
    let _version = get_u32(&mut buf).ok()?;
    let procedure = get_u32(&mut buf).ok()?;
    for _ in 0..2 {
        let _flavor = get_u32(&mut buf).ok()?;
        get_opaque(&mut buf, 400).ok()?;
    }
    Some((
        xid,
        RecordedCall {
            program,
            procedure,
            args: buf.to_vec(),
        },
    ))
}

fn reply(xid: u32, stat: u32, results: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::new();
    for word in [xid, 1, 0, 0, 0, stat] {
        buf.put_u32(word);
    }
    buf.put_slice(results);
    buf.to_vec()
}

fn answer(config: &MockRpcServerConfig, port: u16, call: &RecordedCall) -> (u32, Vec<u8>) {
    let mut args = Bytes::copy_from_slice(&call.args);
    let mut out = BytesMut::new();

    match (call.program, call.procedure) {
        (PMAP_PROG, 3) => {
            let program = get_u32(&mut args).unwrap_or(0);
            let registered = match program {
                YP_PROG => config.yp_registered,
                BOOTPARAM_PROG => config.bootparam_registered,
                _ => false,
            };
            out.put_u32(if registered { u32::from(port) } else { 0 });
        }
        (YP_PROG, 1) => {
            let domain = get_string(&mut args, 64).unwrap_or_default();
            out.put_u32(u32::from(config.domains.contains(&domain)));
        }
        (YP_PROG, 4) | (YP_PROG, 5) => {
            let domain = get_string(&mut args, 64).unwrap_or_default();
            let map = get_string(&mut args, 64).unwrap_or_default();
            let key = if call.procedure == 5 {
                get_opaque(&mut args, 1024).ok()
            } else {
                None
            };
            let (status, entry) = fetch(config, &domain, &map, key.as_deref());
            out.put_i32(status);
            let (k, v) = entry.unwrap_or_default();
            put_opaque(&mut out, v.as_bytes());
            put_opaque(&mut out, k.as_bytes());
        }
        (YP_PROG, 11) => {
            let domain = get_string(&mut args, 64).unwrap_or_default();
            if config.domains.contains(&domain) {
                out.put_i32(YP_TRUE);
                for name in &config.map_list {
                    out.put_u32(1);
                    put_string(&mut out, name);
                }
            } else {
                out.put_i32(YP_NODOM);
            }
            out.put_u32(0);
        }
        (BOOTPARAM_PROG, 1) => match &config.whoami {
            Some(_) if parse_whoami_address(&mut args).is_none() => return (4, Vec::new()),
            Some((client_name, domain_name, router)) => {
                put_string(&mut out, client_name);
                put_string(&mut out, domain_name);
                out.put_i32(1);
                for octet in router {
                    out.put_i32(i32::from(*octet));
                }
            }
            None => return (PROC_UNAVAIL, Vec::new()),
        },
        (PMAP_PROG | YP_PROG | BOOTPARAM_PROG, _) => return (PROC_UNAVAIL, Vec::new()),
        _ => return (PROG_UNAVAIL, Vec::new()),
    }

    if args.has_remaining() && call.program != PMAP_PROG {
        // Leftover argument bytes mean the client encoded something extra.
        return (4, Vec::new());
    }

    (SUCCESS, out.to_vec())
}

fn fetch(
    config: &MockRpcServerConfig,
    domain: &str,
    map: &str,
    key: Option<&[u8]>,
) -> (i32, Option<(String, String)>) {
    if !config.domains.iter().any(|d| d == domain) {
        return (YP_NODOM, None);
    }
    let Some(entries) = config.maps.get(map) else {
        return (YP_NOMAP, None);
    };

    let position = match key {
        None => 0,
        Some(key) => match entries.iter().position(|(k, _)| k.as_bytes() == key) {
            Some(found) => found + 1,
            None => return (YP_NOKEY, None),
        },
    };

    match entries.get(position) {
        Some(entry) => (YP_TRUE, Some(entry.clone())),
        None => (YP_NOMORE, None),
    }
}

/// Reads a `bp_address`, returning the dotted-quad it carries.
fn parse_whoami_address(args: &mut Bytes) -> Option<[u8; 4]> {
    if get_u32(args).ok()? != 1 {
        return None;
    }
    let mut octets = [0u8; 4];
    for octet in &mut octets {
        *octet = u8::try_from(get_u32(args).ok()?).ok()?;
    }
    Some(octets)
}
