use std::net::IpAddr;
use std::sync::Arc;
use tracing::info;
use ypprobe_application::ports::HostResolver;
use ypprobe_domain::{Config, DomainError};
use ypprobe_infrastructure::{BootParamRpcClient, PortMapper, SystemHostResolver, YpRpcClient};

/// RPC adapters for one server host. Nothing is sent until a use case calls.
pub struct Clients {
    pub yp: Arc<YpRpcClient>,
    pub bootparam: Arc<BootParamRpcClient>,
    pub resolver: Arc<SystemHostResolver>,
}

impl Clients {
    pub async fn connect(server: &str, config: &Config) -> Result<Self, DomainError> {
        let resolver = Arc::new(SystemHostResolver::new());
        let ip = resolver.resolve_ipv4(server).await?;

        info!(server = %server, ip = %ip, "Server resolved");

        let portmap = Arc::new(PortMapper::new(server, IpAddr::V4(ip), &config.transport));

        Ok(Self {
            yp: Arc::new(YpRpcClient::new(Arc::clone(&portmap))),
            bootparam: Arc::new(BootParamRpcClient::new(portmap)),
            resolver,
        })
    }
}
