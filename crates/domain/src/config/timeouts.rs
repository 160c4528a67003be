use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeoutConfig {
    /// Seconds allowed for probe calls: domain check, map list, whoami.
    #[serde(default = "default_initial_timeout")]
    pub initial_timeout: u64,

    /// Seconds allowed for each FIRST/NEXT call during a map transfer.
    #[serde(default = "default_transfer_timeout")]
    pub transfer_timeout: u64,
}

impl TimeoutConfig {
    pub fn initial(&self) -> Duration {
        Duration::from_secs(self.initial_timeout)
    }

    pub fn transfer(&self) -> Duration {
        Duration::from_secs(self.transfer_timeout)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            initial_timeout: default_initial_timeout(),
            transfer_timeout: default_transfer_timeout(),
        }
    }
}

fn default_initial_timeout() -> u64 {
    15
}

fn default_transfer_timeout() -> u64 {
    30
}
