use super::message::{decode_reply, encode_call};
use super::transport::RpcTransport;
use super::xdr::{XdrDecode, XdrEncode};
use bytes::Buf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tracing::{debug, instrument};
use ypprobe_domain::{DomainError, RpcProcedure, RpcStatus};

/// Issues calls over one transport, numbering them with a per-client xid
/// sequence that starts at a random value.
pub struct RpcClient {
    server: String,
    transport: Box<dyn RpcTransport>,
    next_xid: AtomicU32,
}

impl RpcClient {
    pub fn new(server: &str, transport: Box<dyn RpcTransport>) -> Self {
        Self {
            server: server.to_string(),
            transport,
            next_xid: AtomicU32::new(fastrand::u32(..)),
        }
    }

    fn xid(&self) -> u32 {
        self.next_xid.fetch_add(1, Ordering::Relaxed)
    }

    #[instrument(skip(self, procedure, args), fields(server = %self.server, procedure = %procedure))]
    pub async fn call<A, R>(
        &self,
        procedure: RpcProcedure,
        args: &A,
        timeout: Duration,
    ) -> Result<R, DomainError>
    where
        A: XdrEncode + Sync + ?Sized,
        R: XdrDecode,
    {
        let xid = self.xid();
        let message = encode_call(xid, procedure, args);

        let datagram = self.transport.exchange(xid, &message, timeout).await?;

        let reply = decode_reply(datagram).map_err(|e| DomainError::InvalidRpcReply {
            server: self.server.clone(),
            reason: e.to_string(),
        })?;

        let mut results = reply.body.map_err(|status| {
            debug!(%status, "Call rejected");
            DomainError::Rpc {
                server: self.server.clone(),
                status,
            }
        })?;

        let decoded = R::decode(&mut results).map_err(|e| {
            debug!(error = %e, "Cannot decode results");
            DomainError::Rpc {
                server: self.server.clone(),
                status: RpcStatus::CantDecodeRes,
            }
        })?;

        if results.has_remaining() {
            debug!(trailing = results.remaining(), "Ignoring trailing reply bytes");
        }

        Ok(decoded)
    }
}
