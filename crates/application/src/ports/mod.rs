mod bootparam_server;
mod entry_sink;
mod host_resolver;
mod yp_server;

pub use bootparam_server::BootParamServer;
pub use entry_sink::EntrySink;
pub use host_resolver::HostResolver;
pub use yp_server::YpServer;
