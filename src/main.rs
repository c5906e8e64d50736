mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use container_inventory::inventory::{Collector, RuntimeSource, Snapshot};
use container_inventory::provider::{InventoryProvider, RecordBuffer};
use container_inventory::runtime::{request, Endpoint, SocketTransport};
use container_inventory::utils::host;
use container_inventory::{logging, output};
use std::time::Duration;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init(&cli.log_format).context("initializing logging")?;

    let endpoint: Endpoint = cli
        .host
        .parse()
        .with_context(|| format!("invalid runtime host {:?}", cli.host))?;
    let timeout = (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs));
    let transport = SocketTransport::new(endpoint).with_timeout(timeout);
    let host_name = host::host_name();
    let collector = Collector::new(RuntimeSource::new(transport)).with_host_name(host_name.clone());

    match cli.command {
        Commands::Collect { output, verbose } => {
            let provider = InventoryProvider::new(collector);
            let mut sink = RecordBuffer::default();
            provider.enumerate_instances(&mut sink);

            let snapshot = Snapshot::new(host_name, sink.records);
            output::display(&snapshot, &output, verbose).context("rendering snapshot")?;
        }
        Commands::Inspect { id, output } => {
            request::validate_id(&id).context("refusing to inspect")?;
            let record = collector.inspect_one(&id);
            output::display_record(&record, &output).context("rendering record")?;
        }
    }

    Ok(())
}
