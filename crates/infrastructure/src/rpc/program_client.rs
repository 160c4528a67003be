use super::client::RpcClient;
use super::portmap::PortMapper;
use super::transport::udp::UdpTransport;
use super::xdr::{XdrDecode, XdrEncode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tokio::time::Instant;
use ypprobe_domain::{DomainError, RpcProcedure, RpcProgram};

/// A client bound to one program on one host. The port is looked up on the
/// first call and the socket is reused for every call after it.
pub struct ProgramClient {
    program: RpcProgram,
    portmap: Arc<PortMapper>,
    client: OnceCell<RpcClient>,
}

impl ProgramClient {
    pub fn new(program: RpcProgram, portmap: Arc<PortMapper>) -> Self {
        Self {
            program,
            portmap,
            client: OnceCell::new(),
        }
    }

    pub fn server(&self) -> &str {
        self.portmap.server()
    }

    /// Port lookup and call share the single `timeout` budget.
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
        let deadline = Instant::now() + timeout;

        let client = self
            .client
            .get_or_try_init(|| async {
                let peer = self.portmap.resolve(self.program, timeout).await?;
                let transport =
                    UdpTransport::connect(self.server(), peer, self.portmap.max_reply_size())
                        .await?;
                Ok::<_, DomainError>(RpcClient::new(self.server(), Box::new(transport)))
            })
            .await?;

        let remaining = deadline.saturating_duration_since(Instant::now());
        client.call(procedure, args, remaining).await
    }
}
