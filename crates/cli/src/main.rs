use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use ypprobe_domain::{CliOverrides, DomainError, Invocation};

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "ypprobe")]
#[command(version)]
#[command(about = "Query NIS/YP and bootparam servers for domains and map contents")]
#[command(override_usage = commands::USAGE.trim_start_matches("usage: "))]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Deadline for domain checks, map lists and identity queries (seconds)
    #[arg(long, value_name = "SECS")]
    initial_timeout: Option<u64>,

    /// Deadline for each map transfer call (seconds)
    #[arg(long, value_name = "SECS")]
    transfer_timeout: Option<u64>,

    /// Fixed ypserv port, skips the portmapper
    #[arg(long, value_name = "PORT")]
    yp_port: Option<u16>,

    /// Fixed rpc.bootparamd port, skips the portmapper
    #[arg(long, value_name = "PORT")]
    bootparam_port: Option<u16>,

    /// Portmapper port
    #[arg(long, value_name = "PORT")]
    portmapper_port: Option<u16>,

    /// Print each map entry as "key value"
    #[arg(short = 'k', long)]
    keys: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// server client | server domain mapname | server domain maplist
    #[arg(value_name = "ARGS")]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("ypprobe: cannot start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ExitCode::from(exit_status(runtime.block_on(run(cli))))
}

/// Reports a failed run on stderr and maps the outcome to the process status.
fn exit_status(result: anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            1
        }
    }
}

fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<DomainError>() {
        Some(domain_err) if domain_err.is_usage() => commands::USAGE.to_string(),
        _ => format!("ypprobe: {:#}", err),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Arguments are checked before anything else so a bad invocation
    // never reaches the network.
    let invocation = Invocation::from_args(&cli.args)?;

    let cli_overrides = CliOverrides {
        initial_timeout: cli.initial_timeout,
        transfer_timeout: cli.transfer_timeout,
        portmapper_port: cli.portmapper_port,
        yp_port: cli.yp_port,
        bootparam_port: cli.bootparam_port,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config, cli.log_level.as_deref())?;

    debug!(operation = invocation.name(), "Invocation parsed");

    let clients = di::Clients::connect(invocation.server(), &config).await?;
    let use_cases = di::UseCases::new(&clients, &config);

    commands::dispatch(&invocation, &use_cases, cli.keys, &mut io::stdout()).await?;
    Ok(())
}
