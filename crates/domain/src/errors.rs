use crate::rpc_status::RpcStatus;
use crate::yp::YpError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("{0}: unknown host.")]
    UnknownHost(String),

    #[error("Invalid NIS domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid map name: {0}")]
    InvalidMapName(String),

    #[error("Invalid client address: {0}")]
    InvalidClientAddress(String),

    #[error("{server}: {status}")]
    Rpc { server: String, status: RpcStatus },

    #[error("RPC request to {server} timed out after {after:?}")]
    TransportTimeout { server: String, after: Duration },

    #[error("RPC: Unable to receive; connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Invalid RPC reply from {server}: {reason}")]
    InvalidRpcReply { server: String, reason: String },

    #[error("{server} does not serve domain {domain}.")]
    DomainNotServed { server: String, domain: String },

    #[error("cannot get map list: {0}")]
    MapListFailed(YpError),

    #[error("cannot get map {map}: {error}")]
    MapFetchFailed { map: String, error: YpError },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn is_usage(&self) -> bool {
        matches!(self, DomainError::Usage(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::Rpc {
                    status: RpcStatus::TimedOut,
                    ..
                }
        )
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
