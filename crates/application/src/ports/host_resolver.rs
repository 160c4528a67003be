use async_trait::async_trait;
use std::net::Ipv4Addr;
use ypprobe_domain::DomainError;

#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to its first IPv4 address; `UnknownHost` otherwise.
    async fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, DomainError>;
}
