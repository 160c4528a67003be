use crate::rpc::{PortMapper, ProgramClient};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use ypprobe_application::ports::BootParamServer;
use ypprobe_domain::rpc_program::{BOOTPARAMPROC_WHOAMI, BOOTPARAM_PROGRAM};
use ypprobe_domain::{DomainError, WhoamiReply, WhoamiRequest};

/// rpc.bootparamd over ONC RPC/UDP.
pub struct BootParamRpcClient {
    rpc: ProgramClient,
}

impl BootParamRpcClient {
    pub fn new(portmap: Arc<PortMapper>) -> Self {
        Self {
            rpc: ProgramClient::new(BOOTPARAM_PROGRAM, portmap),
        }
    }
}

#[async_trait]
impl BootParamServer for BootParamRpcClient {
    fn server_name(&self) -> &str {
        self.rpc.server()
    }

    async fn whoami(
        &self,
        request: &WhoamiRequest,
        timeout: Duration,
    ) -> Result<WhoamiReply, DomainError> {
        self.rpc.call(BOOTPARAMPROC_WHOAMI, request, timeout).await
    }
}
