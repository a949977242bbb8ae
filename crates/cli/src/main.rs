use anyhow::Context;
use clap::Parser;
use ferrous_mdns_domain::CliOverrides;
use ferrous_mdns_infrastructure::MessageDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::{debug, info, warn};

mod bootstrap;
mod input;
mod report;

use report::Report;

#[derive(Parser)]
#[command(name = "ferrous-mdns")]
#[command(version)]
#[command(about = "Ferrous mDNS - decode captured multicast DNS datagrams")]
struct Cli {
    /// File with one hex-encoded datagram per line (stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Reject datagrams that end before every declared record was read
    #[arg(long)]
    strict: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        strict_section_counts: cli.strict,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(
        max_pointer_hops = config.decoder.max_pointer_hops,
        strict_section_counts = config.decoder.strict_section_counts,
        "Configuration loaded"
    );

    let reader: Box<dyn BufRead> = match cli.input.as_deref() {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let decoder = MessageDecoder::new(config.decoder);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (mut decoded, mut dropped) = (0usize, 0usize);

    for datagram in input::read_datagrams(reader) {
        let datagram = datagram?;
        let line = match datagram.bytes {
            Ok(bytes) => match decoder.decode(&bytes) {
                Ok(message) => {
                    decoded += 1;
                    Report::decoded(datagram.line, &message).to_json(cli.pretty)?
                }
                Err(e) => {
                    dropped += 1;
                    Report::failed(datagram.line, e).to_json(cli.pretty)?
                }
            },
            Err(e) => {
                warn!(line = datagram.line, error = %e, "Skipping malformed input line");
                dropped += 1;
                Report::failed(datagram.line, e).to_json(cli.pretty)?
            }
        };
        writeln!(out, "{}", line)?;
    }

    info!(decoded, dropped, "Finished");
    Ok(())
}
