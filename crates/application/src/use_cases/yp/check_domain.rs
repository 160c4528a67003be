use std::sync::Arc;
use tracing::{debug, instrument};
use ypprobe_domain::{DomainError, NisDomain};

use crate::ports::YpServer;
use crate::services::{CallClass, DeadlineGovernor};

pub struct CheckDomainUseCase {
    server: Arc<dyn YpServer>,
    governor: DeadlineGovernor,
}

impl CheckDomainUseCase {
    pub fn new(server: Arc<dyn YpServer>, governor: DeadlineGovernor) -> Self {
        Self { server, governor }
    }

    #[instrument(skip(self))]
    pub async fn is_served(&self, domain: &NisDomain) -> Result<bool, DomainError> {
        let served = self
            .governor
            .run(CallClass::Probe, self.server.server_name(), |deadline| {
                self.server.serves_domain(domain, deadline)
            })
            .await?;

        debug!(server = %self.server.server_name(), served, "Domain check answered");
        Ok(served)
    }

    /// Fails with `DomainNotServed` unless the server answers yes.
    pub async fn require_served(&self, domain: &NisDomain) -> Result<(), DomainError> {
        if self.is_served(domain).await? {
            return Ok(());
        }

        Err(DomainError::DomainNotServed {
            server: self.server.server_name().to_string(),
            domain: domain.to_string(),
        })
    }
}
