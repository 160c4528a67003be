use async_trait::async_trait;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::debug;
use ypprobe_application::ports::HostResolver;
use ypprobe_domain::DomainError;

/// Resolves names through the system resolver (`getaddrinfo`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostResolver;

impl SystemHostResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, DomainError> {
        if let Ok(ip) = host.parse::<Ipv4Addr>() {
            return Ok(ip);
        }

        let addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| {
                debug!(host = %host, error = %e, "Host lookup failed");
                DomainError::UnknownHost(host.to_string())
            })?;

        let ip = addrs
            .filter_map(|addr: SocketAddr| match addr.ip() {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .next()
            .ok_or_else(|| DomainError::UnknownHost(host.to_string()))?;

        debug!(host = %host, ip = %ip, "Host resolved");
        Ok(ip)
    }
}
