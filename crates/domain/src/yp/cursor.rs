//! Enumeration cursor for a FIRST/NEXT map walk.
//!
//! The cursor owns the most recently received key. `next_request` moves that
//! key into the outgoing `MapRequest`, so the buffer is released together with
//! the request once it has been sent. Values never enter the cursor; the caller
//! gets them back from `advance` and drops them after emitting.

use super::{FetchOutcome, MapName, MapRequest, NisDomain};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Position {
    Start,
    After(Vec<u8>),
    AwaitingReply,
    Exhausted,
}

#[derive(Debug)]
pub struct MapCursor {
    domain: NisDomain,
    map: MapName,
    position: Position,
    entries: usize,
}

impl MapCursor {
    pub fn new(domain: NisDomain, map: MapName) -> Self {
        Self {
            domain,
            map,
            position: Position::Start,
            entries: 0,
        }
    }

    /// Builds the next request, or `None` once the map is exhausted.
    ///
    /// Each call must be followed by `advance` with the reply before another
    /// request can be built; asking twice in a row yields `None`.
    pub fn next_request(&mut self) -> Option<MapRequest> {
        match std::mem::replace(&mut self.position, Position::Exhausted) {
            Position::Start => {
                self.position = Position::AwaitingReply;
                Some(MapRequest::First {
                    domain: self.domain.clone(),
                    map: self.map.clone(),
                })
            }
            Position::After(key) => {
                self.position = Position::AwaitingReply;
                Some(MapRequest::Next {
                    domain: self.domain.clone(),
                    map: self.map.clone(),
                    key,
                })
            }
            Position::AwaitingReply => {
                self.position = Position::AwaitingReply;
                None
            }
            Position::Exhausted => None,
        }
    }

    /// Feeds the decoded reply of the last request. Returns the entry value to
    /// emit; the entry key is retained as the cursor for the next request.
    pub fn advance(&mut self, outcome: FetchOutcome) -> Option<Vec<u8>> {
        match outcome {
            FetchOutcome::Entry(entry) => {
                self.entries += 1;
                self.position = Position::After(entry.key);
                Some(entry.value)
            }
            FetchOutcome::EndOfMap => {
                self.position = Position::Exhausted;
                None
            }
        }
    }

    /// Key of the entry most recently returned by `advance`.
    pub fn key(&self) -> Option<&[u8]> {
        match &self.position {
            Position::After(key) => Some(key),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.position == Position::Exhausted
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn domain(&self) -> &NisDomain {
        &self.domain
    }

    pub fn map(&self) -> &MapName {
        &self.map
    }
}
