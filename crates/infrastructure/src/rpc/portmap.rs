//! Port discovery through the portmapper (program 100000, version 2).

use super::client::RpcClient;
use super::transport::udp::UdpTransport;
use super::xdr::XdrEncode;
use bytes::{BufMut, BytesMut};
use dashmap::DashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};
use ypprobe_domain::config::TransportConfig;
use ypprobe_domain::rpc_program::{
    BOOTPARAM_PROGRAM, IPPROTO_UDP, PMAPPROC_GETPORT, YP_PROGRAM,
};
use ypprobe_domain::{DomainError, RpcProgram, RpcStatus};

/// `struct mapping`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortMapping {
    pub program: u32,
    pub version: u32,
    pub protocol: u32,
    pub port: u32,
}

impl XdrEncode for PortMapping {
    fn encode(&self, buf: &mut BytesMut) {
        buf.put_u32(self.program);
        buf.put_u32(self.version);
        buf.put_u32(self.protocol);
        buf.put_u32(self.port);
    }
}

/// Resolves the UDP port of each program on one host, once per program.
pub struct PortMapper {
    server: String,
    host: IpAddr,
    portmapper_port: u16,
    max_reply_size: usize,
    fixed: DashMap<u32, u16>,
    cache: DashMap<u32, u16>,
    client: OnceCell<RpcClient>,
}

impl PortMapper {
    pub fn new(server: &str, host: IpAddr, config: &TransportConfig) -> Self {
        let fixed = DashMap::new();
        if let Some(port) = config.yp_port {
            fixed.insert(YP_PROGRAM.number, port);
        }
        if let Some(port) = config.bootparam_port {
            fixed.insert(BOOTPARAM_PROGRAM.number, port);
        }

        Self {
            server: server.to_string(),
            host,
            portmapper_port: config.portmapper_port,
            max_reply_size: config.max_reply_size,
            fixed,
            cache: DashMap::new(),
            client: OnceCell::new(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn max_reply_size(&self) -> usize {
        self.max_reply_size
    }

    pub async fn resolve(
        &self,
        program: RpcProgram,
        timeout: Duration,
    ) -> Result<SocketAddr, DomainError> {
        if let Some(port) = self.fixed.get(&program.number) {
            debug!(%program, port = *port, "Using fixed port");
            return Ok(SocketAddr::new(self.host, *port));
        }

        if let Some(port) = self.cache.get(&program.number) {
            return Ok(SocketAddr::new(self.host, *port));
        }

        let port = self.get_port(program, timeout).await?;
        self.cache.insert(program.number, port);

        info!(server = %self.server, %program, port, "Program port resolved");
        Ok(SocketAddr::new(self.host, port))
    }

    async fn get_port(&self, program: RpcProgram, timeout: Duration) -> Result<u16, DomainError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                let peer = SocketAddr::new(self.host, self.portmapper_port);
                let transport = UdpTransport::connect(&self.server, peer, self.max_reply_size).await?;
                Ok::<_, DomainError>(RpcClient::new(&self.server, Box::new(transport)))
            })
            .await?;

        let mapping = PortMapping {
            program: program.number,
            version: program.version,
            protocol: IPPROTO_UDP,
            port: 0,
        };

        let port: u32 = client
            .call(PMAPPROC_GETPORT, &mapping, timeout)
            .await
            .map_err(|e| match e {
                DomainError::Rpc { server, .. } => DomainError::Rpc {
                    server,
                    status: RpcStatus::PmapFailure,
                },
                other => other,
            })?;

        match u16::try_from(port) {
            Ok(0) => Err(DomainError::Rpc {
                server: self.server.clone(),
                status: RpcStatus::ProgNotRegistered,
            }),
            Ok(port) => Ok(port),
            Err(_) => Err(DomainError::InvalidRpcReply {
                server: self.server.clone(),
                reason: format!("portmapper returned port {}", port),
            }),
        }
    }
}
