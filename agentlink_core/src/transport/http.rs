/*!
 * HTTP transport for delivering payloads to the local trace agent.
 *
 * Uses `ureq`, a pure-Rust blocking HTTP client with no async runtime.
 * `send` runs on whatever thread produced the payload.
 *
 * Behaviour:
 * - **Fresh connection per call** - a new `ureq::Agent` is built for every
 *   `send`, so nothing is pooled or kept alive between calls.
 * - **Bounded read** - waiting for the response is capped at `TIMEOUT`.
 *   Connect and write use the client defaults.
 * - **Never raises** - every failure is logged and reduced to a status
 *   code. Counters record what the agent said; transport failures are
 *   only logged.
 * - **Single attempt** - no retries.
 */

use std::process;
use std::sync::Arc;

use ureq::Agent;

use super::error::DeliveryError;
use crate::log::{Logger, StderrLogger};
use crate::protocol::constants::{CONTENT_TYPE, INTERNAL_ERROR_CODE, TIMEOUT, USER_AGENT};
use crate::protocol::status::StatusClass;
use crate::stats::{Counters, Stats};

// ---------------------------------------------------------------------------
// Reply
// ---------------------------------------------------------------------------

/**
 * The parts of an agent response the transport looks at: the numeric
 * status code and its reason phrase. The body is never read.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub code: u16,

    /// Standard phrase for `code` (e.g. `"Not Found"`), not the literal
    /// text from the agent's status line.
    pub reason: String,
}

impl Reply {
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }

    fn from_response<B>(response: &ureq::http::Response<B>) -> Self {
        let status = response.status();
        Self::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status"),
        )
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/**
 * Delivers payloads to `http://{hostname}:{port}{path}` and counts the
 * outcomes.
 *
 * Created once by the instrumentation layer and shared (typically behind
 * an `Arc`) by every thread that emits payloads. The counters are the
 * only shared mutable state; network I/O happens outside their lock.
 */
pub struct Transport {
    hostname: String,
    port: u16,

    /// Sent with every request. Always carries `Content-Type: text/json`.
    headers: Vec<(String, String)>,

    counters: Counters,
    logger: Arc<dyn Logger>,
}

impl Transport {
    /**
     * Creates a transport that logs errors to stderr.
     *
     * Nothing is validated here: a bad hostname or port only shows up as
     * a failed `send`.
     */
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self::with_logger(hostname, port, Arc::new(StderrLogger::new()))
    }

    /// Creates a transport that reports through the given logger.
    pub fn with_logger(hostname: impl Into<String>, port: u16, logger: Arc<dyn Logger>) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            headers: vec![("Content-Type".to_string(), CONTENT_TYPE.to_string())],
            counters: Counters::new(),
            logger,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn set_hostname(&mut self, hostname: impl Into<String>) {
        self.hostname = hostname.into();
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    /// Default headers attached to every request.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Full URL a payload for `path` is posted to.
    pub fn endpoint(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.hostname, self.port, path)
    }

    /**
     * Posts `payload` to `path` on the agent and returns the status code.
     *
     * Safe to call concurrently from any number of threads.
     *
     * # Returns
     * - The agent's status code when a reply was received and parsed.
     * - `500` when the agent could not be reached (nothing counted) or
     *   its reply could not be parsed (`internal_error` counted).
     *
     * Only `stats()` can tell a genuine `500` from the agent apart from
     * the synthetic one.
     */
    pub fn send(&self, path: &str, payload: impl AsRef<[u8]>) -> u16 {
        self.logger
            .debug(&format!("Sending data from process: {}", process::id()));

        match self.post(path, payload.as_ref()) {
            Ok(reply) => self.handle_response(&reply),
            Err(err) if err.is_malformed_response() => self.handle_malformed(&err),
            Err(err) => {
                self.logger.error(&err.to_string());
                INTERNAL_ERROR_CODE
            }
        }
    }

    /**
     * Classifies a reply, bumps the matching counter and returns its code.
     *
     * 1xx, 3xx and out-of-range codes are returned without counting or
     * logging anything.
     */
    pub fn handle_response(&self, reply: &Reply) -> u16 {
        let class = StatusClass::of(reply.code);

        if class.is_error() {
            let side = if class == StatusClass::ClientError {
                "Client"
            } else {
                "Server"
            };
            self.logger.error(&format!("{side} error: {}", reply.reason));
        } else if class == StatusClass::Success {
            self.logger.debug("Payload correctly sent to the trace agent.");
        }

        self.counters.record(class);
        reply.code
    }

    /// Consistent snapshot of the four outcome counters.
    pub fn stats(&self) -> Stats {
        self.counters.snapshot()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn handle_malformed(&self, err: &DeliveryError) -> u16 {
        self.logger.error(&err.to_string());
        self.counters.record_internal_error();
        INTERNAL_ERROR_CODE
    }

    /**
     * One POST over a freshly built agent.
     *
     * 4xx/5xx are returned as ordinary responses and redirects are not
     * followed, so every status the agent sends reaches `handle_response`.
     */
    fn post(&self, path: &str, payload: &[u8]) -> Result<Reply, DeliveryError> {
        let endpoint = self.endpoint(path);

        let agent: Agent = Agent::config_builder()
            .timeout_recv_response(Some(TIMEOUT))
            .http_status_as_error(false)
            .max_redirects(0)
            .build()
            .into();

        let mut request = agent.post(endpoint.as_str()).header("User-Agent", USER_AGENT);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send(payload)
            .map_err(|err| DeliveryError::from_ureq(&endpoint, err))?;

        Ok(Reply::from_response(&response))
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("headers", &self.headers)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
