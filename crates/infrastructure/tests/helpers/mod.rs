#![allow(dead_code)]

mod rpc_server_mock;

pub use rpc_server_mock::{MockRpcServer, MockRpcServerConfig};

use std::net::SocketAddr;
use std::sync::Arc;
use ypprobe_domain::config::TransportConfig;
use ypprobe_infrastructure::PortMapper;

/// A portmapper pointed at the mock, with every program discovered through it.
pub fn portmap_for(addr: SocketAddr) -> Arc<PortMapper> {
    let config = TransportConfig {
        portmapper_port: addr.port(),
        ..TransportConfig::default()
    };
    Arc::new(PortMapper::new("mockhost", addr.ip(), &config))
}

pub fn config_for(addr: SocketAddr) -> TransportConfig {
    TransportConfig {
        portmapper_port: addr.port(),
        ..TransportConfig::default()
    }
}
