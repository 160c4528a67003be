use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const YPMAXDOMAIN: usize = 64;
pub const YPMAXMAP: usize = 64;
pub const YPMAXRECORD: usize = 1024;

/// Name of an administrative grouping of maps served by ypserv.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NisDomain(Arc<str>);

impl NisDomain {
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name cannot be empty".to_string(),
            ));
        }
        if name.len() > YPMAXDOMAIN {
            return Err(DomainError::InvalidDomainName(format!(
                "{} exceeds {} characters",
                name, YPMAXDOMAIN
            )));
        }
        Ok(Self(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Name of one key/value table within a domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapName(Arc<str>);

impl MapName {
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(DomainError::InvalidMapName(
                "map name cannot be empty".to_string(),
            ));
        }
        if name.len() > YPMAXMAP {
            return Err(DomainError::InvalidMapName(format!(
                "{} exceeds {} characters",
                name, YPMAXMAP
            )));
        }
        Ok(Self(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NisDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MapName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NisDomain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for MapName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NisDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MapName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
