//! Program, version and procedure numbers of the services this client talks to.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RpcProgram {
    pub number: u32,
    pub version: u32,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RpcProcedure {
    pub program: RpcProgram,
    pub number: u32,
    pub name: &'static str,
}

impl fmt::Display for RpcProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} v{})", self.name, self.number, self.version)
    }
}

impl fmt::Display for RpcProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.program.name, self.name)
    }
}

pub const PORTMAP_PROGRAM: RpcProgram = RpcProgram {
    number: 100000,
    version: 2,
    name: "portmapper",
};

pub const YP_PROGRAM: RpcProgram = RpcProgram {
    number: 100004,
    version: 2,
    name: "ypserv",
};

pub const BOOTPARAM_PROGRAM: RpcProgram = RpcProgram {
    number: 100026,
    version: 1,
    name: "bootparamd",
};

pub const PMAPPROC_GETPORT: RpcProcedure = RpcProcedure {
    program: PORTMAP_PROGRAM,
    number: 3,
    name: "GETPORT",
};

pub const YPPROC_DOMAIN: RpcProcedure = RpcProcedure {
    program: YP_PROGRAM,
    number: 1,
    name: "DOMAIN",
};

pub const YPPROC_FIRST: RpcProcedure = RpcProcedure {
    program: YP_PROGRAM,
    number: 4,
    name: "FIRST",
};

pub const YPPROC_NEXT: RpcProcedure = RpcProcedure {
    program: YP_PROGRAM,
    number: 5,
    name: "NEXT",
};

pub const YPPROC_MAPLIST: RpcProcedure = RpcProcedure {
    program: YP_PROGRAM,
    number: 11,
    name: "MAPLIST",
};

pub const BOOTPARAMPROC_WHOAMI: RpcProcedure = RpcProcedure {
    program: BOOTPARAM_PROGRAM,
    number: 1,
    name: "WHOAMI",
};

/// IP protocol number passed to the portmapper when asking for a UDP port.
pub const IPPROTO_UDP: u32 = 17;
