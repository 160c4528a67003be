use super::{MapName, NisDomain};
use crate::rpc_program::{RpcProcedure, YPPROC_FIRST, YPPROC_NEXT};

/// One step of a map walk. `First` is `ypreq_nokey`, `Next` is `ypreq_key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapRequest {
    First {
        domain: NisDomain,
        map: MapName,
    },
    Next {
        domain: NisDomain,
        map: MapName,
        key: Vec<u8>,
    },
}

impl MapRequest {
    pub fn domain(&self) -> &NisDomain {
        match self {
            MapRequest::First { domain, .. } | MapRequest::Next { domain, .. } => domain,
        }
    }

    pub fn map(&self) -> &MapName {
        match self {
            MapRequest::First { map, .. } | MapRequest::Next { map, .. } => map,
        }
    }

    pub fn key(&self) -> Option<&[u8]> {
        match self {
            MapRequest::First { .. } => None,
            MapRequest::Next { key, .. } => Some(key),
        }
    }

    pub fn procedure(&self) -> RpcProcedure {
        match self {
            MapRequest::First { .. } => YPPROC_FIRST,
            MapRequest::Next { .. } => YPPROC_NEXT,
        }
    }
}
