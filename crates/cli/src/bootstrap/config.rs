use anyhow::Context;
use tracing::debug;
use ypprobe_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("failed to load configuration")?;

    debug!(
        initial_timeout = config.timeouts.initial_timeout,
        transfer_timeout = config.timeouts.transfer_timeout,
        portmapper_port = config.transport.portmapper_port,
        "Configuration loaded"
    );

    Ok(config)
}
