//! CLI tool to print Fibonacci-style sequences.
//!
//! Usage:
//!   fib -n 100 [--startx 3] [--starty 2] [--json] [--remote http://127.0.0.1:8080/api/fib] [-v]

#[cfg(feature = "remote")]
mod client;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use log::{debug, info, LevelFilter};

use fibseq::sequence::{DEFAULT_START_A, DEFAULT_START_B};
use fibseq::Bounds;

#[derive(Parser, Debug)]
#[command(
    name = "fib",
    about = "Print a Fibonacci-style sequence up to a limit",
    version
)]
struct Args {
    /// Inclusive upper bound on generated values
    #[arg(short = 'n', long = "limit", allow_negative_numbers = true)]
    limit: i64,

    /// First seed
    #[arg(short = 'x', long, default_value_t = DEFAULT_START_A, allow_negative_numbers = true)]
    startx: i64,

    /// Second seed
    #[arg(short = 'y', long, default_value_t = DEFAULT_START_B, allow_negative_numbers = true)]
    starty: i64,

    /// Print the sequence as a JSON array
    #[arg(long, default_value = "false")]
    json: bool,

    /// Query a running fib-serve endpoint instead of generating locally
    #[cfg(feature = "remote")]
    #[arg(short = 'r', long, env = "FIB_REMOTE")]
    remote: Option<String>,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    let bounds = Bounds::new(args.limit).with_seeds(args.startx, args.starty);
    debug!("bounds: {:?}", bounds);

    #[cfg(feature = "remote")]
    let values = match args.remote.as_deref() {
        Some(endpoint) => fetch_remote(endpoint, &bounds)?,
        None => generate_local(&bounds)?,
    };
    #[cfg(not(feature = "remote"))]
    let values = generate_local(&bounds)?;

    if args.json {
        println!("{}", serde_json::to_string(&values)?);
    } else {
        let line: Vec<String> = values.iter().map(u64::to_string).collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}

fn generate_local(bounds: &Bounds) -> Result<Vec<u64>> {
    let seq = bounds.generate().context("Failed to generate sequence")?;
    info!(
        "{} path produced {} values",
        seq.strategy().as_str(),
        seq.len()
    );
    Ok(seq.into_vec())
}

#[cfg(feature = "remote")]
fn fetch_remote(endpoint: &str, bounds: &Bounds) -> Result<Vec<u64>> {
    let client = client::FibClient::new(endpoint)?;
    info!("GET {}", client.url_for(bounds));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let values = runtime
        .block_on(client.fetch(bounds))
        .with_context(|| format!("Request to {} failed", endpoint))?;
    info!("remote returned {} values", values.len());
    Ok(values)
}
