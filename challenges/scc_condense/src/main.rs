use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::warn;
use scc_condense::{Options, Scanner, Writer};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scc_condense")]
#[command(about = "Classifies the strongly connected components of a graph read from stdin")]
#[command(long_about = None, disable_help_flag = true)]
struct Cli {
    /// Print the DFS trace and per-component details
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// Only `--verbose` is recognised; every other argument is ignored rather than rejected.
    fn parse_lenient() -> Cli {
        Cli::try_parse().unwrap_or_else(|_| Cli {
            verbose: std::env::args().skip(1).any(|arg| arg == "--verbose"),
        })
    }
}

fn main() -> ExitCode {
    // stdout carries the report, so diagnostics go to stderr. Filter comes from RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse_lenient();

    let mut scanner = Scanner::new(io::stdin().lock());
    let mut writer = Writer::new();
    let opts = Options {
        verbose: cli.verbose,
    };

    match scc_condense::solve(&mut scanner, &mut writer, opts) {
        Ok(()) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = stdout
                .write_all(writer.as_bytes())
                .and_then(|()| stdout.flush())
            {
                warn!("failed to write report: {}", err);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!("rejecting input: {:?}", err);
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}
