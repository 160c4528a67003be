//! XDR primitives (RFC 4506).
//!
//! Everything is big-endian and aligned to four bytes. Variable-length
//! opaque data and strings carry a length word and are zero-padded.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XdrError {
    #[error("message truncated: needed {needed} bytes, {remaining} left")]
    Truncated { needed: usize, remaining: usize },

    #[error("length {len} exceeds limit {max}")]
    TooLong { len: usize, max: usize },

    #[error("unexpected {field} {value}")]
    Unexpected { field: &'static str, value: u32 },
}

pub trait XdrEncode {
    fn encode(&self, buf: &mut BytesMut);
}

pub trait XdrDecode: Sized {
    fn decode(buf: &mut Bytes) -> Result<Self, XdrError>;
}

fn padding(len: usize) -> usize {
    (4 - len % 4) % 4
}

fn ensure(buf: &Bytes, needed: usize) -> Result<(), XdrError> {
    if buf.remaining() < needed {
        return Err(XdrError::Truncated {
            needed,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}

pub fn put_opaque(buf: &mut BytesMut, data: &[u8]) {
    buf.put_u32(data.len() as u32);
    buf.put_slice(data);
    buf.put_bytes(0, padding(data.len()));
}

pub fn put_string(buf: &mut BytesMut, s: &str) {
    put_opaque(buf, s.as_bytes());
}

pub fn get_u32(buf: &mut Bytes) -> Result<u32, XdrError> {
    ensure(buf, 4)?;
    Ok(buf.get_u32())
}

pub fn get_i32(buf: &mut Bytes) -> Result<i32, XdrError> {
    ensure(buf, 4)?;
    Ok(buf.get_i32())
}

/// Any non-zero word reads as true.
pub fn get_bool(buf: &mut Bytes) -> Result<bool, XdrError> {
    Ok(get_u32(buf)? != 0)
}

/// Reads variable-length opaque data of at most `max` bytes.
pub fn get_opaque(buf: &mut Bytes, max: usize) -> Result<Vec<u8>, XdrError> {
    let len = get_u32(buf)? as usize;
    if len > max {
        return Err(XdrError::TooLong { len, max });
    }
    let padded = len + padding(len);
    ensure(buf, padded)?;
    let data = buf.split_to(len).to_vec();
    buf.advance(padding(len));
    Ok(data)
}

/// Strings from the wire are not guaranteed to be UTF-8; invalid sequences
/// are replaced rather than rejected.
pub fn get_string(buf: &mut Bytes, max: usize) -> Result<String, XdrError> {
    let data = get_opaque(buf, max)?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Skips opaque data without copying it out.
pub fn skip_opaque(buf: &mut Bytes, max: usize) -> Result<(), XdrError> {
    let len = get_u32(buf)? as usize;
    if len > max {
        return Err(XdrError::TooLong { len, max });
    }
    let padded = len + padding(len);
    ensure(buf, padded)?;
    buf.advance(padded);
    Ok(())
}

impl XdrEncode for () {
    fn encode(&self, _buf: &mut BytesMut) {}
}

impl XdrEncode for u32 {
    fn encode(&self, buf: &mut BytesMut) {
        buf.put_u32(*self);
    }
}

impl XdrEncode for i32 {
    fn encode(&self, buf: &mut BytesMut) {
        buf.put_i32(*self);
    }
}

impl XdrDecode for u32 {
    fn decode(buf: &mut Bytes) -> Result<Self, XdrError> {
        get_u32(buf)
    }
}

impl XdrDecode for bool {
    fn decode(buf: &mut Bytes) -> Result<Self, XdrError> {
        get_bool(buf)
    }
}
