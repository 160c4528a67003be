use std::fmt;

/// `ypstat` as carried in ypserv replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YpStatus {
    True,
    NoMore,
    False,
    NoMap,
    NoDomain,
    NoKey,
    BadOp,
    BadDb,
    YpErr,
    BadArgs,
    Version,
    Unknown(i32),
}

impl YpStatus {
    pub fn from_wire(value: i32) -> Self {
        match value {
            1 => YpStatus::True,
            2 => YpStatus::NoMore,
            0 => YpStatus::False,
            -1 => YpStatus::NoMap,
            -2 => YpStatus::NoDomain,
            -3 => YpStatus::NoKey,
            -4 => YpStatus::BadOp,
            -5 => YpStatus::BadDb,
            -6 => YpStatus::YpErr,
            -7 => YpStatus::BadArgs,
            -8 => YpStatus::Version,
            other => YpStatus::Unknown(other),
        }
    }

    pub fn to_wire(self) -> i32 {
        match self {
            YpStatus::True => 1,
            YpStatus::NoMore => 2,
            YpStatus::False => 0,
            YpStatus::NoMap => -1,
            YpStatus::NoDomain => -2,
            YpStatus::NoKey => -3,
            YpStatus::BadOp => -4,
            YpStatus::BadDb => -5,
            YpStatus::YpErr => -6,
            YpStatus::BadArgs => -7,
            YpStatus::Version => -8,
            YpStatus::Unknown(other) => other,
        }
    }

    pub fn is_true(self) -> bool {
        self == YpStatus::True
    }

    /// Translates a protocol status into the client-side error code.
    /// `True` is the only status that is not an error.
    pub fn to_error(self) -> Option<YpError> {
        match self {
            YpStatus::True => None,
            YpStatus::NoMore => Some(YpError::NoMore),
            YpStatus::False => Some(YpError::YpErr),
            YpStatus::NoMap => Some(YpError::Map),
            YpStatus::NoDomain => Some(YpError::Domain),
            YpStatus::NoKey => Some(YpError::Key),
            YpStatus::BadOp => Some(YpError::YpErr),
            YpStatus::BadDb => Some(YpError::BadDb),
            YpStatus::YpErr => Some(YpError::YpErr),
            YpStatus::BadArgs => Some(YpError::BadArgs),
            YpStatus::Version => Some(YpError::Version),
            YpStatus::Unknown(_) => Some(YpError::YpErr),
        }
    }
}

impl From<i32> for YpStatus {
    fn from(value: i32) -> Self {
        Self::from_wire(value)
    }
}

/// Client-side NIS error codes (`YPERR_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YpError {
    BadArgs,
    Rpc,
    Domain,
    Map,
    Key,
    YpErr,
    Resource,
    NoMore,
    PortMapper,
    YpBind,
    YpServ,
    NoDomain,
    BadDb,
    Version,
    Access,
    Busy,
}

impl YpError {
    pub fn code(&self) -> i32 {
        match self {
            YpError::BadArgs => 1,
            YpError::Rpc => 2,
            YpError::Domain => 3,
            YpError::Map => 4,
            YpError::Key => 5,
            YpError::YpErr => 6,
            YpError::Resource => 7,
            YpError::NoMore => 8,
            YpError::PortMapper => 9,
            YpError::YpBind => 10,
            YpError::YpServ => 11,
            YpError::NoDomain => 12,
            YpError::BadDb => 13,
            YpError::Version => 14,
            YpError::Access => 15,
            YpError::Busy => 16,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            YpError::BadArgs => "Request arguments bad",
            YpError::Rpc => "RPC failure on NIS operation",
            YpError::Domain => "Can't bind to server which serves this domain",
            YpError::Map => "No such map in server's domain",
            YpError::Key => "No such key in map",
            YpError::YpErr => "Internal NIS error",
            YpError::Resource => "Local resource allocation failure",
            YpError::NoMore => "No more records in map database",
            YpError::PortMapper => "Can't communicate with portmapper",
            YpError::YpBind => "Can't communicate with ypbind",
            YpError::YpServ => "Can't communicate with ypserv",
            YpError::NoDomain => "Local domain name not set",
            YpError::BadDb => "NIS map database is bad",
            YpError::Version => "NIS client/server version mismatch - can't supply service",
            YpError::Access => "Permission denied",
            YpError::Busy => "Database is busy",
        }
    }
}

impl fmt::Display for YpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
