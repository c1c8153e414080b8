//! Viravis terminal client — polls the visualizer endpoint and redraws a
//! block-character bar graph in place.
//!
//! Requests run one at a time: fetch, draw, sleep, repeat. Failed polls are
//! logged (`RUST_LOG=debug`) and the loop carries on.

mod cursor;
mod graph;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use cursor::CursorGuard;
use viravis_core::config::{ENDPOINT, POLL_INTERVAL_MS};
use viravis_core::{Payload, PollError, decode_body};

#[derive(Debug, Parser)]
#[command(name = "viravis-term", about = "Live bar graph of the visualizer endpoint")]
struct Args {
    /// Endpoint to poll.
    #[arg(long, default_value = ENDPOINT)]
    url: String,

    /// Height of the graph in terminal rows.
    #[arg(long, default_value_t = 20)]
    rows: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let http = reqwest::Client::new();

    log::info!("polling {} every {POLL_INTERVAL_MS} ms", args.url);
    let _cursor = CursorGuard::hide(std::io::stdout())?;

    tokio::select! {
        r = run(&http, &args) => r,
        _ = tokio::signal::ctrl_c() => {
            write_out("\x1b[2J\x1b[HGoodbye!\n")?;
            Ok(())
        }
    }
}

async fn run(http: &reqwest::Client, args: &Args) -> anyhow::Result<()> {
    let pause = Duration::from_millis(u64::from(POLL_INTERVAL_MS));
    let mut drawn = false;

    loop {
        match fetch_payload(http, &args.url).await {
            Ok(Payload::Series(data)) => {
                write_out(&graph::render_graph(&data, args.rows, drawn))?;
                drawn = true;
            }
            Ok(Payload::Empty) => {}
            Ok(Payload::Malformed(reason)) => log::warn!("unusable payload: {reason}"),
            Err(e) => log::debug!("poll dropped: {e}"),
        }
        tokio::time::sleep(pause).await;
    }
}

async fn fetch_payload(http: &reqwest::Client, url: &str) -> Result<Payload, PollError> {
    let body = http
        .get(url)
        .send()
        .await
        .map_err(|e| PollError::Network(e.to_string()))?
        .text()
        .await
        .map_err(|e| PollError::Network(e.to_string()))?;
    decode_body(&body)
}

fn write_out(s: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(s.as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_browser_client() {
        let args = Args::parse_from(["viravis-term"]);
        assert_eq!(args.url, "http://127.0.0.1:7777");
        assert_eq!(args.rows, 20);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from(["viravis-term", "--url", "http://localhost:9000", "--rows", "8"]);
        assert_eq!(args.url, "http://localhost:9000");
        assert_eq!(args.rows, 8);
    }
}
