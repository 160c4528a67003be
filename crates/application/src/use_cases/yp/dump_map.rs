use std::sync::Arc;
use tracing::{debug, info, instrument};
use ypprobe_domain::{DomainError, MapCursor, MapName, NisDomain};

use super::CheckDomainUseCase;
use crate::ports::{EntrySink, YpServer};
use crate::services::{CallClass, DeadlineGovernor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpSummary {
    pub entries: usize,
}

/// Walks a whole map with FIRST/NEXT calls, emitting each entry as it arrives.
pub struct DumpMapUseCase {
    server: Arc<dyn YpServer>,
    check_domain: CheckDomainUseCase,
    governor: DeadlineGovernor,
}

impl DumpMapUseCase {
    pub fn new(server: Arc<dyn YpServer>, governor: DeadlineGovernor) -> Self {
        Self {
            check_domain: CheckDomainUseCase::new(Arc::clone(&server), governor),
            server,
            governor,
        }
    }

    #[instrument(skip(self, sink))]
    pub async fn execute(
        &self,
        domain: &NisDomain,
        map: &MapName,
        sink: &mut dyn EntrySink,
    ) -> Result<DumpSummary, DomainError> {
        self.check_domain.require_served(domain).await?;

        let mut cursor = MapCursor::new(domain.clone(), map.clone());

        while let Some(request) = cursor.next_request() {
            let reply = self
                .governor
                .run(CallClass::Transfer, self.server.server_name(), |deadline| {
                    self.server.fetch_entry(&request, deadline)
                })
                .await?;

            // The previous key travelled inside this request.
            drop(request);

            if let Some(value) = cursor.advance(reply.into_outcome(map)?) {
                sink.emit(cursor.key().unwrap_or_default(), &value)?;
            }
        }

        debug!(map = %map, "End of map reached");
        info!(
            server = %self.server.server_name(),
            domain = %domain,
            map = %map,
            entries = cursor.entries(),
            "Map transfer complete"
        );

        Ok(DumpSummary {
            entries: cursor.entries(),
        })
    }
}
