use std::fmt;

/// Outcome of a failed remote call, as seen by the client side of ONC RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcStatus {
    CantEncodeArgs,
    CantDecodeRes,
    CantSend,
    CantRecv,
    TimedOut,
    VersMismatch,
    AuthError,
    ProgUnavail,
    ProgVersMismatch,
    ProcUnavail,
    CantDecodeArgs,
    SystemError,
    UnknownHost,
    UnknownProto,
    PmapFailure,
    ProgNotRegistered,
    Failed,
}

impl RpcStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcStatus::CantEncodeArgs => "RPC: Can't encode arguments",
            RpcStatus::CantDecodeRes => "RPC: Can't decode result",
            RpcStatus::CantSend => "RPC: Unable to send",
            RpcStatus::CantRecv => "RPC: Unable to receive",
            RpcStatus::TimedOut => "RPC: Timed out",
            RpcStatus::VersMismatch => "RPC: Incompatible versions of RPC",
            RpcStatus::AuthError => "RPC: Authentication error",
            RpcStatus::ProgUnavail => "RPC: Program unavailable",
            RpcStatus::ProgVersMismatch => "RPC: Program/version mismatch",
            RpcStatus::ProcUnavail => "RPC: Procedure unavailable",
            RpcStatus::CantDecodeArgs => "RPC: Server can't decode arguments",
            RpcStatus::SystemError => "RPC: Remote system error",
            RpcStatus::UnknownHost => "RPC: Unknown host",
            RpcStatus::UnknownProto => "RPC: Unknown protocol",
            RpcStatus::PmapFailure => "RPC: Port mapper failure",
            RpcStatus::ProgNotRegistered => "RPC: Program not registered",
            RpcStatus::Failed => "RPC: Failed (unspecified error)",
        }
    }
}

impl fmt::Display for RpcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
