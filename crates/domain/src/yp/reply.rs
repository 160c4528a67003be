use super::{MapName, YpError, YpStatus};
use crate::DomainError;

/// A key/value pair handed out by a map walk. Both sides are opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// `ypresp_key_val` as decoded off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValReply {
    pub status: YpStatus,
    pub value: Vec<u8>,
    pub key: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Entry(Entry),
    EndOfMap,
}

impl KeyValReply {
    /// Only `NoMore` ends a walk; every other non-true status is an error.
    pub fn into_outcome(self, map: &MapName) -> Result<FetchOutcome, DomainError> {
        match self.status {
            YpStatus::True => Ok(FetchOutcome::Entry(Entry {
                key: self.key,
                value: self.value,
            })),
            YpStatus::NoMore => Ok(FetchOutcome::EndOfMap),
            status => Err(DomainError::MapFetchFailed {
                map: map.to_string(),
                error: status.to_error().unwrap_or(YpError::YpErr),
            }),
        }
    }
}

/// `ypresp_maplist`, with the server's linked list flattened in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapListReply {
    pub status: YpStatus,
    pub maps: Vec<String>,
}

impl MapListReply {
    pub fn into_names(self) -> Result<Vec<String>, DomainError> {
        match self.status.to_error() {
            None => Ok(self.maps),
            Some(error) => Err(DomainError::MapListFailed(error)),
        }
    }
}
