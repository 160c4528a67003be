use std::sync::Arc;
use tracing::{info, instrument};
use ypprobe_domain::{DomainError, NisDomain};

use super::CheckDomainUseCase;
use crate::ports::YpServer;
use crate::services::{CallClass, DeadlineGovernor};

pub struct ListMapsUseCase {
    server: Arc<dyn YpServer>,
    check_domain: CheckDomainUseCase,
    governor: DeadlineGovernor,
}

impl ListMapsUseCase {
    pub fn new(server: Arc<dyn YpServer>, governor: DeadlineGovernor) -> Self {
        Self {
            check_domain: CheckDomainUseCase::new(Arc::clone(&server), governor),
            server,
            governor,
        }
    }

    /// Map names in the order the server sent them.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &NisDomain) -> Result<Vec<String>, DomainError> {
        self.check_domain.require_served(domain).await?;

        let reply = self
            .governor
            .run(CallClass::Probe, self.server.server_name(), |deadline| {
                self.server.map_list(domain, deadline)
            })
            .await?;

        let maps = reply.into_names()?;

        info!(
            server = %self.server.server_name(),
            domain = %domain,
            count = maps.len(),
            "Map list received"
        );

        Ok(maps)
    }
}
