use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};
use ypprobe_domain::config::TimeoutConfig;
use ypprobe_domain::DomainError;

/// Which deadline a call runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallClass {
    /// Domain checks, map lists, whoami.
    Probe,
    /// FIRST/NEXT calls of a map transfer.
    Transfer,
}

/// Bounds every remote call by a hard wall-clock deadline.
///
/// The deadline is handed to the call so the transport can size its own
/// waits, and is enforced again around the whole future. Expiry is final:
/// the call is dropped and `TransportTimeout` is returned, nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineGovernor {
    initial: Duration,
    transfer: Duration,
}

impl DeadlineGovernor {
    pub fn new(initial: Duration, transfer: Duration) -> Self {
        Self { initial, transfer }
    }

    pub fn from_config(config: &TimeoutConfig) -> Self {
        Self::new(config.initial(), config.transfer())
    }

    pub fn deadline(&self, class: CallClass) -> Duration {
        match class {
            CallClass::Probe => self.initial,
            CallClass::Transfer => self.transfer,
        }
    }

    pub async fn run<T, F, Fut>(
        &self,
        class: CallClass,
        server: &str,
        call: F,
    ) -> Result<T, DomainError>
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let deadline = self.deadline(class);
        debug!(server = %server, ?class, ?deadline, "Issuing RPC call");

        match tokio::time::timeout(deadline, call(deadline)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(server = %server, ?class, ?deadline, "RPC call abandoned at deadline");
                Err(DomainError::TransportTimeout {
                    server: server.to_string(),
                    after: deadline,
                })
            }
        }
    }
}
