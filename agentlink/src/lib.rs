/*!
 * agentlink - deliver telemetry payloads to a local trace agent.
 *
 * This is the main crate users should depend on. It re-exports the core
 * transport API and wires up addons (tracing-backed logging) through a
 * single `connect` call.
 *
 * # Quick start
 *
 * ```no_run
 * let transport = agentlink::connect(("127.0.0.1", 8126));
 *
 * let code = transport.send("/v0.3/traces", "[[]]");
 * println!("agent answered {code}, stats: {:?}", transport.stats());
 * ```
 *
 * # With options
 *
 * ```no_run
 * let transport = agentlink::connect(agentlink::Options {
 *     hostname: "trace-agent".into(),
 *     use_tracing: false, // log errors to stderr instead
 *     ..Default::default()
 * });
 * # let _ = transport;
 * ```
 */

use std::sync::Arc;

// ---------------------------------------------------------------------------
// Re-exports from agentlink_core - the public surface area
// ---------------------------------------------------------------------------

pub use agentlink_core::{
    is_client_error, is_informational, is_redirect, is_server_error, is_success, DeliveryError,
    LogLevel, Logger, NoopLogger, Reply, Stats, StatusClass, StderrLogger, Transport,
    CONTENT_TYPE, DEFAULT_HOSTNAME, DEFAULT_PORT, INTERNAL_ERROR_CODE, TIMEOUT, USER_AGENT,
};
pub use agentlink_tracing::TracingLogger;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/**
 * Where the agent lives and how the transport reports problems.
 *
 * Implements `From<(&str, u16)>` so you can pass just an address to
 * `connect()`. Defaults:
 * - `hostname` = `"localhost"`
 * - `port` = `8126`
 * - `use_tracing` = `true`
 */
#[derive(Debug, Clone)]
pub struct Options {
    pub hostname: String,
    pub port: u16,

    /// Route diagnostics through `tracing` (`true`) or plain stderr
    /// lines (`false`).
    pub use_tracing: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            use_tracing: true,
        }
    }
}

/**
 * Allows `agentlink::connect(("127.0.0.1", 8126))`.
 */
impl From<(&str, u16)> for Options {
    fn from((hostname, port): (&str, u16)) -> Self {
        Self {
            hostname: hostname.to_string(),
            port,
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// connect
// ---------------------------------------------------------------------------

/**
 * Builds a `Transport` for the agent described by `options`.
 *
 * No connection is opened here (each `send` opens its own), so this
 * cannot fail: an unreachable agent only shows up as `500` from `send`.
 *
 * The returned transport is `Send + Sync`; wrap it in an `Arc` to share
 * it between threads.
 */
pub fn connect(options: impl Into<Options>) -> Transport {
    let opts = options.into();

    let logger: Arc<dyn Logger> = if opts.use_tracing {
        Arc::new(TracingLogger::for_agent(&opts.hostname, opts.port))
    } else {
        Arc::new(StderrLogger::new())
    };

    Transport::with_logger(opts.hostname, opts.port, logger)
}
