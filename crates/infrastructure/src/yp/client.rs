use crate::rpc::{PortMapper, ProgramClient};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use ypprobe_application::ports::YpServer;
use ypprobe_domain::rpc_program::{YPPROC_DOMAIN, YPPROC_MAPLIST, YP_PROGRAM};
use ypprobe_domain::{DomainError, KeyValReply, MapListReply, MapRequest, NisDomain};

/// ypserv over ONC RPC/UDP.
pub struct YpRpcClient {
    rpc: ProgramClient,
}

impl YpRpcClient {
    pub fn new(portmap: Arc<PortMapper>) -> Self {
        Self {
            rpc: ProgramClient::new(YP_PROGRAM, portmap),
        }
    }
}

#[async_trait]
impl YpServer for YpRpcClient {
    fn server_name(&self) -> &str {
        self.rpc.server()
    }

    async fn serves_domain(
        &self,
        domain: &NisDomain,
        timeout: Duration,
    ) -> Result<bool, DomainError> {
        self.rpc.call(YPPROC_DOMAIN, domain, timeout).await
    }

    async fn fetch_entry(
        &self,
        request: &MapRequest,
        timeout: Duration,
    ) -> Result<KeyValReply, DomainError> {
        let reply: KeyValReply = self.rpc.call(request.procedure(), request, timeout).await?;

        debug!(
            map = %request.map(),
            status = ?reply.status,
            key_len = reply.key.len(),
            value_len = reply.value.len(),
            "Map entry fetched"
        );

        Ok(reply)
    }

    async fn map_list(
        &self,
        domain: &NisDomain,
        timeout: Duration,
    ) -> Result<MapListReply, DomainError> {
        self.rpc.call(YPPROC_MAPLIST, domain, timeout).await
    }
}
