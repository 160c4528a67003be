//! XDR bodies of `bootparamproc_whoami`.

use crate::rpc::xdr::{get_i32, get_string};
use crate::rpc::{XdrDecode, XdrEncode, XdrError};
use bytes::{BufMut, Bytes, BytesMut};
use std::net::Ipv4Addr;
use ypprobe_domain::bootparam::{IP_ADDR_TYPE, MAX_MACHINE_NAME};
use ypprobe_domain::{BootAddress, WhoamiReply, WhoamiRequest};

/// `bp_address`: a union on `address_type`. Each octet of an IPv4 address
/// travels as a full XDR int.
impl XdrEncode for BootAddress {
    fn encode(&self, buf: &mut BytesMut) {
        buf.put_i32(self.address_type());
        match self {
            BootAddress::Ip(ip) => {
                for octet in ip.octets() {
                    buf.put_i32(i32::from(octet));
                }
            }
        }
    }
}

impl XdrDecode for BootAddress {
    fn decode(buf: &mut Bytes) -> Result<Self, XdrError> {
        let address_type = get_i32(buf)?;
        if address_type != IP_ADDR_TYPE {
            return Err(XdrError::Unexpected {
                field: "address type",
                value: address_type as u32,
            });
        }

        let mut octets = [0u8; 4];
        for octet in &mut octets {
            *octet = get_i32(buf)? as u8;
        }
        Ok(BootAddress::Ip(Ipv4Addr::from(octets)))
    }
}

impl XdrEncode for WhoamiRequest {
    fn encode(&self, buf: &mut BytesMut) {
        self.client_address.encode(buf);
    }
}

impl XdrDecode for WhoamiReply {
    fn decode(buf: &mut Bytes) -> Result<Self, XdrError> {
        Ok(WhoamiReply {
            client_name: get_string(buf, MAX_MACHINE_NAME)?,
            domain_name: get_string(buf, MAX_MACHINE_NAME)?,
            router_address: BootAddress::decode(buf)?,
        })
    }
}
