//! HTTP server answering sequence queries.
//!
//! Usage:
//!   fib-serve [--addr 127.0.0.1:8080] [--route /api/fib] [--log-level info]
//!
//! Then: `curl 'http://127.0.0.1:8080/api/fib?n=100&startx=3&starty=2'`

mod http;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use log::{info, warn, LevelFilter};
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(
    name = "fib-serve",
    about = "Serve Fibonacci-style sequences over HTTP",
    version
)]
struct Args {
    /// Address to listen on
    #[arg(short = 'a', long, env = "FIB_ADDR", default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Path the endpoint answers on
    #[arg(short = 'r', long, env = "FIB_ROUTE", default_value = "/api/fib")]
    route: String,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, env = "FIB_LOG", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    let listener = TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("Failed to bind {}", args.addr))?;
    info!(
        "listening on http://{}{}",
        listener.local_addr()?,
        args.route
    );

    let route: Arc<str> = Arc::from(args.route);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(pair) => pair,
                    Err(err) => {
                        warn!("accept failed: {}", err);
                        continue;
                    }
                };
                let route = Arc::clone(&route);
                tokio::spawn(async move {
                    if let Err(err) = http::serve_connection(stream, &route).await {
                        warn!("{}: {}", peer, err);
                    }
                });
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}
