/*!
 * Transport-wide constants.
 *
 * None of these are configurable at runtime.
 */
use std::time::Duration;

/// Upper bound on waiting for the agent's response once the request is written.
pub const TIMEOUT: Duration = Duration::from_secs(1);

/// `Content-Type` sent with every payload, regardless of the payload contents.
pub const CONTENT_TYPE: &str = "text/json";

/// Host the trace agent listens on when nothing else is configured.
pub const DEFAULT_HOSTNAME: &str = "localhost";

/// Port the trace agent listens on when nothing else is configured.
pub const DEFAULT_PORT: u16 = 8126;

/// Status code reported when the agent could not be reached or its reply
/// could not be understood.
pub const INTERNAL_ERROR_CODE: u16 = 500;

/// `User-Agent` header value, derived from the crate version.
pub const USER_AGENT: &str = concat!("agentlink/", env!("CARGO_PKG_VERSION"));
