//! `transit-catalogue`: read a request document, print the answers.
//!
//! JSON mode (default) reads a `{base_requests, stat_requests,
//! routing_settings}` document and writes the response array to stdout.
//! Text mode reads the line-oriented protocol and writes one answer per line.
//! Logs go to stderr; `RUST_LOG` overrides `-v`.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(
    name = "transit-catalogue",
    version,
    about = "Answer bus, stop and route queries over a transit catalogue"
)]
struct Args {
    /// Request document; reads stdin when omitted
    input: Option<PathBuf>,

    /// Input protocol
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON responses
    #[arg(long)]
    pretty: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = read_input(args.input.as_ref())?;
    let mut stdout = io::stdout().lock();

    match args.format {
        Format::Json => {
            let responses = tc_requests::process_reader(input.as_bytes())
                .context("failed to process request document")?;
            info!(responses = responses.len(), "writing responses");
            if args.pretty {
                serde_json::to_writer_pretty(&mut stdout, &responses)?;
            } else {
                serde_json::to_writer(&mut stdout, &responses)?;
            }
            writeln!(stdout)?;
        }
        Format::Text => {
            let answers = tc_requests::run_text(&input).context("failed to process text requests")?;
            stdout.write_all(answers.as_bytes())?;
        }
    }
    stdout.flush().context("failed to flush stdout")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    let mut input = String::new();
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            BufReader::new(file)
                .read_to_string(&mut input)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        None => {
            io::stdin().read_to_string(&mut input).context("failed to read stdin")?;
        }
    }
    Ok(input)
}
