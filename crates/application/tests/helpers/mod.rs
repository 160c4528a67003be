#![allow(dead_code)]

mod mock_servers;

pub use mock_servers::{MockBootParamServer, MockHostResolver, MockYpServer, VecSink};

use std::time::Duration;
use ypprobe_application::services::DeadlineGovernor;
use ypprobe_domain::{MapName, NisDomain};

pub fn governor() -> DeadlineGovernor {
    DeadlineGovernor::new(Duration::from_secs(15), Duration::from_secs(30))
}

pub fn short_governor() -> DeadlineGovernor {
    DeadlineGovernor::new(Duration::from_millis(50), Duration::from_millis(50))
}

pub fn domain(name: &str) -> NisDomain {
    NisDomain::new(name).unwrap()
}

pub fn map(name: &str) -> MapName {
    MapName::new(name).unwrap()
}
