use crate::DomainError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// rpc.bootparamd truncates domain names beyond this length.
pub const BOOTPARAM_MAXDOMAINLEN: usize = 32;

pub const MAX_MACHINE_NAME: usize = 255;

/// `address_type` discriminant for IPv4 in `bp_address`.
pub const IP_ADDR_TYPE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BootAddress {
    Ip(Ipv4Addr),
}

impl BootAddress {
    pub fn address_type(&self) -> i32 {
        match self {
            BootAddress::Ip(_) => IP_ADDR_TYPE,
        }
    }
}

impl fmt::Display for BootAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootAddress::Ip(ip) => write!(f, "{}", ip),
        }
    }
}

/// The machine whose identity is being asked for, as given by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientIdentifier {
    Address(Ipv4Addr),
    Name(String),
}

impl ClientIdentifier {
    pub fn is_name(&self) -> bool {
        matches!(self, ClientIdentifier::Name(_))
    }
}

impl FromStr for ClientIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::InvalidClientAddress(
                "client cannot be empty".to_string(),
            ));
        }
        Ok(match s.parse::<Ipv4Addr>() {
            Ok(ip) => ClientIdentifier::Address(ip),
            Err(_) => ClientIdentifier::Name(s.to_string()),
        })
    }
}

impl fmt::Display for ClientIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientIdentifier::Address(ip) => write!(f, "{}", ip),
            ClientIdentifier::Name(name) => f.write_str(name),
        }
    }
}

/// `bp_whoami_arg`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoamiRequest {
    pub client_address: BootAddress,
}

/// `bp_whoami_res`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoamiReply {
    pub client_name: String,
    pub domain_name: String,
    pub router_address: BootAddress,
}

/// What the identity query prints: the (clamped) domain name plus annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityReport {
    pub domain_name: String,
    pub truncated: bool,
    pub client_name: Option<String>,
}

impl IdentityReport {
    pub fn from_reply(reply: WhoamiReply, client: &ClientIdentifier) -> Self {
        let truncated = reply.domain_name.chars().count() >= BOOTPARAM_MAXDOMAINLEN;
        let domain_name = reply
            .domain_name
            .chars()
            .take(BOOTPARAM_MAXDOMAINLEN)
            .collect();

        Self {
            domain_name,
            truncated,
            client_name: client.is_name().then_some(reply.client_name),
        }
    }
}

impl fmt::Display for IdentityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.domain_name)?;
        if self.truncated {
            f.write_str(" (truncated?)")?;
        }
        if let Some(name) = &self.client_name {
            write!(f, " (client name = {})", name)?;
        }
        Ok(())
    }
}
