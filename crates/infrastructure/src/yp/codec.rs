//! XDR bodies of the ypserv procedures used here.

use crate::rpc::xdr::{get_bool, get_i32, get_opaque, get_string, put_opaque, put_string};
use crate::rpc::{XdrDecode, XdrEncode, XdrError};
use bytes::{Buf, Bytes, BytesMut};
use ypprobe_domain::yp::{YPMAXMAP, YPMAXRECORD};
use ypprobe_domain::{KeyValReply, MapListReply, MapRequest, NisDomain, YpStatus};

/// `domainname`
impl XdrEncode for NisDomain {
    fn encode(&self, buf: &mut BytesMut) {
        put_string(buf, self.as_str());
    }
}

/// `ypreq_nokey` for FIRST, `ypreq_key` for NEXT.
impl XdrEncode for MapRequest {
    fn encode(&self, buf: &mut BytesMut) {
        put_string(buf, self.domain().as_str());
        put_string(buf, self.map().as_str());
        if let Some(key) = self.key() {
            put_opaque(buf, key);
        }
    }
}

/// `ypresp_key_val`. Note the value precedes the key on the wire.
impl XdrDecode for KeyValReply {
    fn decode(buf: &mut Bytes) -> Result<Self, XdrError> {
        let status = YpStatus::from_wire(get_i32(buf)?);

        // Some servers stop after the status word on failure.
        if !status.is_true() && !buf.has_remaining() {
            return Ok(KeyValReply {
                status,
                value: Vec::new(),
                key: Vec::new(),
            });
        }

        let value = get_opaque(buf, YPMAXRECORD)?;
        let key = get_opaque(buf, YPMAXRECORD)?;
        Ok(KeyValReply { status, value, key })
    }
}

/// `ypresp_maplist`: status followed by an XDR optional-data linked list.
impl XdrDecode for MapListReply {
    fn decode(buf: &mut Bytes) -> Result<Self, XdrError> {
        let status = YpStatus::from_wire(get_i32(buf)?);
        let mut maps = Vec::new();

        if !status.is_true() && !buf.has_remaining() {
            return Ok(MapListReply { status, maps });
        }

        while get_bool(buf)? {
            maps.push(get_string(buf, YPMAXMAP)?);
        }

        Ok(MapListReply { status, maps })
    }
}
