use async_trait::async_trait;
use std::time::Duration;
use ypprobe_domain::{DomainError, KeyValReply, MapListReply, MapRequest, NisDomain};

/// A ypserv instance reachable over RPC. Each method is exactly one call and
/// must give up once `timeout` has elapsed.
#[async_trait]
pub trait YpServer: Send + Sync {
    /// Host name used in diagnostics.
    fn server_name(&self) -> &str;

    /// YPPROC_DOMAIN
    async fn serves_domain(
        &self,
        domain: &NisDomain,
        timeout: Duration,
    ) -> Result<bool, DomainError>;

    /// YPPROC_FIRST or YPPROC_NEXT, depending on the request variant.
    async fn fetch_entry(
        &self,
        request: &MapRequest,
        timeout: Duration,
    ) -> Result<KeyValReply, DomainError>;

    /// YPPROC_MAPLIST
    async fn map_list(
        &self,
        domain: &NisDomain,
        timeout: Duration,
    ) -> Result<MapListReply, DomainError>;
}
