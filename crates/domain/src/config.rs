mod errors;
mod logging;
mod root;
mod timeouts;
mod transport;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use timeouts::TimeoutConfig;
pub use transport::TransportConfig;
