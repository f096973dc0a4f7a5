//! Cache simulator CLI.
//!
//! This binary replays a memory-access trace against a simulated
//! set-associative cache and prints the final hit/miss/eviction summary.
//! It performs:
//! 1. **Argument parsing:** The classic `(s, E, b)` geometry flags plus the
//!    trace path and verbosity.
//! 2. **Simulation:** Constructs the cache, replays the trace in order, and
//!    optionally annotates every operation with its access outcomes.
//! 3. **Reporting:** Emits the `hits:H misses:M evictions:E` summary line.

use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use csim_core::{Cache, PrintSummary, Replayer, SimConfig, SimError};

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    author,
    version,
    disable_help_flag = true,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Replay a memory-access trace against a simulated set-associative cache \
with LRU replacement, reporting aggregate hits, misses, and evictions.\n\n\
Examples:\n  csim -s 4 -E 1 -b 4 -t traces/yi.trace\n  csim -v -s 8 -E 2 -b 4 -t traces/long.trace"
)]
struct Cli {
    /// Number of set-index bits (the cache has 2^s sets).
    #[arg(short = 's', value_name = "s")]
    set_bits: u32,

    /// Associativity: number of lines per set (must be at least 1).
    #[arg(short = 'E', value_name = "E")]
    associativity: usize,

    /// Number of block-offset bits (2^b-byte blocks).
    #[arg(short = 'b', value_name = "b")]
    block_bits: u32,

    /// Trace file to replay.
    #[arg(short = 't', value_name = "tracefile")]
    tracefile: PathBuf,

    /// Annotate every operation with the outcome of its accesses.
    #[arg(short = 'v')]
    verbose: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // -h, unrecognized flags, and missing required arguments all land in
    // the error arm: usage goes to standard error and the process fails.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{err}");
            process::exit(1);
        }
    };
    let config = SimConfig {
        set_bits: cli.set_bits,
        associativity: cli.associativity,
        block_bits: cli.block_bits,
        verbose: cli.verbose,
    };

    if let Err(e) = run(&config, &cli.tracefile) {
        eprintln!("csim: {e}");
        process::exit(1);
    }
}

/// Runs one simulation: build the cache, replay the trace, print the summary.
fn run(config: &SimConfig, tracefile: &Path) -> Result<(), SimError> {
    let mut cache = Cache::new(config)?;
    let mut replayer = Replayer::new(&mut cache);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let annotations: Option<&mut dyn Write> = if config.verbose {
        Some(&mut out)
    } else {
        None
    };

    replayer.replay_file(tracefile, annotations)?;

    if config.verbose {
        replayer.stats().print();
    }
    replayer.finish(&mut PrintSummary);
    Ok(())
}
