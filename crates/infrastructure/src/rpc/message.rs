//! ONC RPC v2 call and reply messages (RFC 5531), AUTH_NONE only.

use super::xdr::{get_u32, skip_opaque, XdrEncode, XdrError};
use bytes::{BufMut, Bytes, BytesMut};
use ypprobe_domain::{RpcProcedure, RpcStatus};

pub const RPC_VERSION: u32 = 2;

const MSG_CALL: u32 = 0;
const MSG_REPLY: u32 = 1;

const MSG_ACCEPTED: u32 = 0;
const MSG_DENIED: u32 = 1;

const SUCCESS: u32 = 0;
const PROG_UNAVAIL: u32 = 1;
const PROG_MISMATCH: u32 = 2;
const PROC_UNAVAIL: u32 = 3;
const GARBAGE_ARGS: u32 = 4;
const SYSTEM_ERR: u32 = 5;

const RPC_MISMATCH: u32 = 0;
const AUTH_ERROR: u32 = 1;

const AUTH_NONE: u32 = 0;
const MAX_AUTH_BYTES: usize = 400;

/// Serializes a complete call message: header, null credentials, arguments.
pub fn encode_call<A: XdrEncode + ?Sized>(xid: u32, procedure: RpcProcedure, args: &A) -> Bytes {
    let mut buf = BytesMut::with_capacity(128);
    buf.put_u32(xid);
    buf.put_u32(MSG_CALL);
    buf.put_u32(RPC_VERSION);
    buf.put_u32(procedure.program.number);
    buf.put_u32(procedure.program.version);
    buf.put_u32(procedure.number);
    // cred, verf
    for _ in 0..2 {
        buf.put_u32(AUTH_NONE);
        buf.put_u32(0);
    }
    args.encode(&mut buf);
    buf.freeze()
}

#[derive(Debug)]
pub struct RpcReply {
    pub xid: u32,
    /// Undecoded procedure results on success, the failure status otherwise.
    pub body: Result<Bytes, RpcStatus>,
}

/// Reads the xid of a datagram without decoding the rest.
pub fn peek_xid(datagram: &[u8]) -> Option<u32> {
    datagram
        .get(..4)
        .and_then(|word| word.try_into().ok())
        .map(u32::from_be_bytes)
}

pub fn decode_reply(mut buf: Bytes) -> Result<RpcReply, XdrError> {
    let xid = get_u32(&mut buf)?;

    let mtype = get_u32(&mut buf)?;
    if mtype != MSG_REPLY {
        return Err(XdrError::Unexpected {
            field: "message type",
            value: mtype,
        });
    }

    let body = match get_u32(&mut buf)? {
        MSG_ACCEPTED => decode_accepted(&mut buf)?.map(|()| buf),
        MSG_DENIED => Err(decode_denied(&mut buf)?),
        other => {
            return Err(XdrError::Unexpected {
                field: "reply status",
                value: other,
            })
        }
    };

    Ok(RpcReply { xid, body })
}

fn decode_accepted(buf: &mut Bytes) -> Result<Result<(), RpcStatus>, XdrError> {
    let _flavor = get_u32(buf)?;
    skip_opaque(buf, MAX_AUTH_BYTES)?;

    Ok(match get_u32(buf)? {
        SUCCESS => Ok(()),
        PROG_UNAVAIL => Err(RpcStatus::ProgUnavail),
        PROG_MISMATCH => {
            let _low = get_u32(buf)?;
            let _high = get_u32(buf)?;
            Err(RpcStatus::ProgVersMismatch)
        }
        PROC_UNAVAIL => Err(RpcStatus::ProcUnavail),
        GARBAGE_ARGS => Err(RpcStatus::CantDecodeArgs),
        SYSTEM_ERR => Err(RpcStatus::SystemError),
        _ => Err(RpcStatus::Failed),
    })
}

fn decode_denied(buf: &mut Bytes) -> Result<RpcStatus, XdrError> {
    Ok(match get_u32(buf)? {
        RPC_MISMATCH => RpcStatus::VersMismatch,
        AUTH_ERROR => RpcStatus::AuthError,
        _ => RpcStatus::Failed,
    })
}
