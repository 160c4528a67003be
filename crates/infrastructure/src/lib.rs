//! ypprobe Infrastructure Layer
pub mod bootparam;
pub mod output;
pub mod rpc;
pub mod system;
pub mod yp;

pub use bootparam::BootParamRpcClient;
pub use output::WriterSink;
pub use rpc::PortMapper;
pub use system::SystemHostResolver;
pub use yp::YpRpcClient;
