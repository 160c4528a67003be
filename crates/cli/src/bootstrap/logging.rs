use tracing_subscriber::EnvFilter;
use ypprobe_domain::Config;

/// Logs go to stderr so stdout carries nothing but query results.
/// Precedence: `--log-level`, then `RUST_LOG`, then the configured level.
pub fn init_logging(config: &Config, cli_level: Option<&str>) -> anyhow::Result<()> {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.logging.level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
