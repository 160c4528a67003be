pub mod client;
pub mod message;
pub mod portmap;
pub mod program_client;
pub mod transport;
pub mod xdr;

pub use client::RpcClient;
pub use portmap::PortMapper;
pub use program_client::ProgramClient;
pub use transport::{udp::UdpTransport, RpcTransport};
pub use xdr::{XdrDecode, XdrEncode, XdrError};
