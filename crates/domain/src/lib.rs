//! ypprobe Domain Layer
pub mod bootparam;
pub mod config;
pub mod errors;
pub mod invocation;
pub mod rpc_program;
pub mod rpc_status;
pub mod yp;

pub use bootparam::{
    BootAddress, ClientIdentifier, IdentityReport, WhoamiReply, WhoamiRequest,
    BOOTPARAM_MAXDOMAINLEN,
};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use invocation::{Invocation, MAPLIST_SENTINEL};
pub use rpc_program::{RpcProcedure, RpcProgram};
pub use rpc_status::RpcStatus;
pub use yp::{
    Entry, FetchOutcome, KeyValReply, MapCursor, MapListReply, MapName, MapRequest, NisDomain,
    YpError, YpStatus,
};
