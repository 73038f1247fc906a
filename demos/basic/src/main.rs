/**
 * Minimal demo for the agentlink transport.
 *
 * Start a trace agent (or anything that speaks HTTP) on the target
 * address, then run:
 *
 *   cargo run -p agentlink_demo
 *   cargo run -p agentlink_demo -- --threads 4       # send from 4 threads
 *   RUST_LOG=agentlink=debug cargo run -p agentlink_demo
 *
 * With no agent running every send returns 500 and the stats stay at
 * zero, which is the expected behaviour.
 */
use std::sync::Arc;
use std::thread;

use tracing_subscriber::EnvFilter;

/// Payload sent on every call: one empty trace.
const PAYLOAD: &str = "[[]]";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agentlink=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let threads = args
        .iter()
        .position(|a| a == "--threads")
        .and_then(|i| args.get(i + 1))
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(1);

    let transport = Arc::new(agentlink::connect(agentlink::Options::default()));
    println!(
        "[demo] Posting to {} from {threads} thread(s)",
        transport.endpoint("/v0.3/traces")
    );

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let transport = Arc::clone(&transport);
            thread::spawn(move || transport.send("/v0.3/traces", PAYLOAD))
        })
        .collect();

    for handle in handles {
        match handle.join() {
            Ok(code) => println!("[demo] Agent answered {code}"),
            Err(_) => eprintln!("[demo] Sender thread panicked"),
        }
    }

    match serde_json::to_string_pretty(&transport.stats()) {
        Ok(json) => println!("[demo] Stats:\n{json}"),
        Err(e) => eprintln!("[demo] Could not render stats: {e}"),
    }
}
