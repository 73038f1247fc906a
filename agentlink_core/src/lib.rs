/*!
 * agentlink core - delivers telemetry payloads to a local trace agent.
 *
 * This crate provides the transport, its outcome counters and the logging
 * capability it reports through. End users should depend on the
 * `agentlink` facade crate instead, which re-exports everything and wires
 * up addons (tracing-backed logging).
 *
 * # Module structure
 *
 * - `protocol/` - what we exchange: constants, status classification
 * - `transport/` - how we deliver: HTTP client, delivery errors
 * - `stats` - lock-guarded outcome counters and their snapshot
 * - `log` - the logging capability handed to a transport
 *
 * # Example
 *
 * ```no_run
 * use agentlink_core::Transport;
 *
 * let transport = Transport::new("127.0.0.1", 8126);
 * let code = transport.send("/v0.3/traces", br#"[[]]"#);
 *
 * if code != 200 {
 *     eprintln!("agent stats: {:?}", transport.stats());
 * }
 * ```
 */

pub mod log;
mod protocol;
mod stats;
mod transport;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use log::{LogLevel, Logger, NoopLogger, StderrLogger};
pub use protocol::constants::{
    CONTENT_TYPE, DEFAULT_HOSTNAME, DEFAULT_PORT, INTERNAL_ERROR_CODE, TIMEOUT, USER_AGENT,
};
pub use protocol::status::{
    is_client_error, is_informational, is_redirect, is_server_error, is_success, StatusClass,
};
pub use stats::Stats;
pub use transport::{DeliveryError, Reply, Transport};
