#![allow(dead_code)]
use ypprobe_domain::{Entry, KeyValReply, WhoamiReply, YpStatus};
use ypprobe_domain::BootAddress;
use std::net::Ipv4Addr;

pub fn entry(key: &str, value: &str) -> Entry {
    Entry {
        key: key.as_bytes().to_vec(),
        value: value.as_bytes().to_vec(),
    }
}

pub fn key_val(status: YpStatus, key: &str, value: &str) -> KeyValReply {
    KeyValReply {
        status,
        value: value.as_bytes().to_vec(),
        key: key.as_bytes().to_vec(),
    }
}

pub fn whoami_reply(client_name: &str, domain_name: &str) -> WhoamiReply {
    WhoamiReply {
        client_name: client_name.to_string(),
        domain_name: domain_name.to_string(),
        router_address: BootAddress::Ip(Ipv4Addr::new(10, 0, 0, 1)),
    }
}
