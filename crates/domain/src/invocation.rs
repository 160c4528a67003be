use crate::bootparam::ClientIdentifier;
use crate::yp::{MapName, NisDomain};
use crate::DomainError;

/// Map name that selects the map-list query instead of a map dump.
/// A real map with this name cannot be fetched.
pub const MAPLIST_SENTINEL: &str = "maplist";

/// The three operations, selected by the number of positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Identity {
        server: String,
        client: ClientIdentifier,
    },
    MapList {
        server: String,
        domain: NisDomain,
    },
    DumpMap {
        server: String,
        domain: NisDomain,
        map: MapName,
    },
}

impl Invocation {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, DomainError> {
        match args {
            [server, client] => Ok(Invocation::Identity {
                server: non_empty_server(server.as_ref())?,
                client: client.as_ref().parse()?,
            }),
            [server, domain, map] if map.as_ref() == MAPLIST_SENTINEL => Ok(Invocation::MapList {
                server: non_empty_server(server.as_ref())?,
                domain: NisDomain::new(domain)?,
            }),
            [server, domain, map] => Ok(Invocation::DumpMap {
                server: non_empty_server(server.as_ref())?,
                domain: NisDomain::new(domain)?,
                map: MapName::new(map)?,
            }),
            other => Err(DomainError::Usage(format!(
                "expected 2 or 3 arguments, got {}",
                other.len()
            ))),
        }
    }

    pub fn server(&self) -> &str {
        match self {
            Invocation::Identity { server, .. }
            | Invocation::MapList { server, .. }
            | Invocation::DumpMap { server, .. } => server,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Invocation::Identity { .. } => "identity",
            Invocation::MapList { .. } => "maplist",
            Invocation::DumpMap { .. } => "dump",
        }
    }
}

fn non_empty_server(server: &str) -> Result<String, DomainError> {
    if server.is_empty() {
        return Err(DomainError::Usage("server cannot be empty".to_string()));
    }
    Ok(server.to_string())
}
