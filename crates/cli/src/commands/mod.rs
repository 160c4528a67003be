use crate::di::UseCases;
use std::io::Write;
use tracing::info;
use ypprobe_domain::{DomainError, Invocation};
use ypprobe_infrastructure::WriterSink;

pub const USAGE: &str = "\
usage: ypprobe [options] server client
       ypprobe [options] server domain mapname
       ypprobe [options] server domain maplist";

/// Runs the selected operation and writes its result to `out`.
pub async fn dispatch(
    invocation: &Invocation,
    use_cases: &UseCases,
    with_keys: bool,
    out: &mut (dyn Write + Send),
) -> Result<(), DomainError> {
    info!(operation = invocation.name(), server = invocation.server(), "Dispatching");

    match invocation {
        Invocation::Identity { client, .. } => {
            let report = use_cases.whoami.execute(client).await?;
            writeln!(out, "{}", report)?;
        }
        Invocation::MapList { domain, .. } => {
            let maps = use_cases.list_maps.execute(domain).await?;
            for map in maps {
                writeln!(out, "{}", map)?;
            }
        }
        Invocation::DumpMap { domain, map, .. } => {
            let mut sink = WriterSink::new(&mut *out, with_keys);
            let result = use_cases.dump_map.execute(domain, map, &mut sink).await;
            // Entries received before a failure stay on stdout.
            sink.flush()?;
            result?;
        }
    }

    out.flush()?;
    Ok(())
}
