use async_trait::async_trait;
use std::time::Duration;
use ypprobe_domain::{DomainError, WhoamiReply, WhoamiRequest};

#[async_trait]
pub trait BootParamServer: Send + Sync {
    fn server_name(&self) -> &str;

    async fn whoami(
        &self,
        request: &WhoamiRequest,
        timeout: Duration,
    ) -> Result<WhoamiReply, DomainError>;
}
