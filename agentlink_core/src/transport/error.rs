/*!
 * Delivery failures.
 *
 * These never leave the crate through `Transport::send`, which reduces
 * them to the synthetic `500`. They exist so the internal code paths can
 * use `Result` and `?`, and so the two failure kinds can be told apart
 * when deciding which counter (if any) to bump.
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    /**
     * The request never produced a response: connection refused, DNS
     * failure, write error, read timeout, invalid request target...
     *
     * Not counted.
     */
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: ureq::Error,
    },

    /**
     * The agent answered, but its reply could not be parsed into a
     * status line. Counted as `internal_error`.
     */
    #[error("malformed response from agent: {0}")]
    MalformedResponse(#[source] ureq::Error),
}

impl DeliveryError {
    /// Sorts a `ureq` failure into one of the two kinds.
    pub(crate) fn from_ureq(endpoint: &str, err: ureq::Error) -> Self {
        match err {
            ureq::Error::Protocol(_) => DeliveryError::MalformedResponse(err),
            source => DeliveryError::Request {
                endpoint: endpoint.to_string(),
                source,
            },
        }
    }

    /// `true` when the failure should bump `internal_error`.
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, DeliveryError::MalformedResponse(_))
    }
}
