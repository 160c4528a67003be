//! ONC RPC over UDP.
//!
//! One connected socket per endpoint, so an ICMP port-unreachable surfaces as
//! `ConnectionRefused` on the next receive instead of a silent timeout.
//! Nothing is retransmitted.

use super::RpcTransport;
use crate::rpc::message::peek_xid;
use async_trait::async_trait;
use bytes::Bytes;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::debug;
use ypprobe_domain::{DomainError, RpcStatus};

pub struct UdpTransport {
    server: String,
    peer: SocketAddr,
    socket: UdpSocket,
    max_reply_size: usize,
}

impl UdpTransport {
    pub async fn connect(
        server: &str,
        peer: SocketAddr,
        max_reply_size: usize,
    ) -> Result<Self, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if peer.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;
        socket
            .connect(peer)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to connect to {}: {}", peer, e)))?;

        Ok(Self {
            server: server.to_string(),
            peer,
            socket,
            max_reply_size,
        })
    }

    fn map_io_error(&self, err: io::Error, status: RpcStatus) -> DomainError {
        if err.kind() == io::ErrorKind::ConnectionRefused {
            return DomainError::TransportConnectionRefused {
                server: self.server.clone(),
            };
        }
        debug!(server = %self.server, error = %err, "UDP socket error");
        DomainError::Rpc {
            server: self.server.clone(),
            status,
        }
    }
}

#[async_trait]
impl RpcTransport for UdpTransport {
    async fn exchange(
        &self,
        xid: u32,
        message: &[u8],
        timeout: Duration,
    ) -> Result<Bytes, DomainError> {
        let deadline = Instant::now() + timeout;
        let timed_out = || DomainError::TransportTimeout {
            server: self.server.clone(),
            after: timeout,
        };

        let bytes_sent = tokio::time::timeout_at(deadline, self.socket.send(message))
            .await
            .map_err(|_| timed_out())?
            .map_err(|e| self.map_io_error(e, RpcStatus::CantSend))?;

        debug!(peer = %self.peer, xid, bytes_sent, "RPC call sent");

        let mut recv_buf = vec![0u8; self.max_reply_size];

        loop {
            let bytes_received = tokio::time::timeout_at(deadline, self.socket.recv(&mut recv_buf))
                .await
                .map_err(|_| timed_out())?
                .map_err(|e| self.map_io_error(e, RpcStatus::CantRecv))?;

            let datagram = &recv_buf[..bytes_received];
            match peek_xid(datagram) {
                Some(got) if got == xid => {
                    debug!(peer = %self.peer, xid, bytes_received, "RPC reply received");
                    return Ok(Bytes::copy_from_slice(datagram));
                }
                got => {
                    debug!(
                        peer = %self.peer,
                        expected = xid,
                        received = ?got,
                        "Discarding datagram with mismatched xid"
                    );
                }
            }
        }
    }
}
