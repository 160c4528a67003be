use std::sync::Arc;
use tracing::{debug, instrument};
use ypprobe_domain::{
    BootAddress, ClientIdentifier, DomainError, IdentityReport, WhoamiRequest,
};

use crate::ports::{BootParamServer, HostResolver};
use crate::services::{CallClass, DeadlineGovernor};

/// Asks rpc.bootparamd which NIS domain a diskless client boots into.
pub struct WhoamiUseCase {
    server: Arc<dyn BootParamServer>,
    resolver: Arc<dyn HostResolver>,
    governor: DeadlineGovernor,
}

impl WhoamiUseCase {
    pub fn new(
        server: Arc<dyn BootParamServer>,
        resolver: Arc<dyn HostResolver>,
        governor: DeadlineGovernor,
    ) -> Self {
        Self {
            server,
            resolver,
            governor,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, client: &ClientIdentifier) -> Result<IdentityReport, DomainError> {
        let address = match client {
            ClientIdentifier::Address(ip) => *ip,
            ClientIdentifier::Name(name) => self.resolver.resolve_ipv4(name).await?,
        };

        let request = WhoamiRequest {
            client_address: BootAddress::Ip(address),
        };

        let reply = self
            .governor
            .run(CallClass::Probe, self.server.server_name(), |deadline| {
                self.server.whoami(&request, deadline)
            })
            .await?;

        debug!(
            client = %address,
            client_name = %reply.client_name,
            domain_name = %reply.domain_name,
            router = %reply.router_address,
            "WHOAMI answered"
        );

        Ok(IdentityReport::from_reply(reply, client))
    }
}
