pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use ypprobe_domain::DomainError;

/// Carries one RPC exchange to a fixed server endpoint.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Sends `message` and waits for the datagram answering `xid`. Replies
    /// carrying any other xid are discarded; the wait is bounded by `timeout`
    /// as a whole, not per datagram.
    async fn exchange(
        &self,
        xid: u32,
        message: &[u8],
        timeout: Duration,
    ) -> Result<Bytes, DomainError>;
}
