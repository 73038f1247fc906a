/*!
 * HTTP status classification.
 *
 * Pure range checks on the numeric status code. Classification never
 * fails: codes outside 100–599 land in `StatusClass::Unknown` and are
 * treated like informational replies (nothing is counted).
 */

// ---------------------------------------------------------------------------
// Range predicates
// ---------------------------------------------------------------------------

/// `true` for 100–199.
pub fn is_informational(code: u16) -> bool {
    (100..=199).contains(&code)
}

/// `true` for 200–299.
pub fn is_success(code: u16) -> bool {
    (200..=299).contains(&code)
}

/// `true` for 300–399.
pub fn is_redirect(code: u16) -> bool {
    (300..=399).contains(&code)
}

/// `true` for 400–499.
pub fn is_client_error(code: u16) -> bool {
    (400..=499).contains(&code)
}

/// `true` for 500–599.
pub fn is_server_error(code: u16) -> bool {
    (500..=599).contains(&code)
}

// ---------------------------------------------------------------------------
// StatusClass
// ---------------------------------------------------------------------------

/**
 * The class an HTTP status code belongs to.
 *
 * Only `Success`, `ClientError` and `ServerError` have a matching counter;
 * the remaining classes are returned to the caller but otherwise ignored.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirect,
    ClientError,
    ServerError,
    /// Outside the five standard ranges (e.g. `999`).
    Unknown,
}

impl StatusClass {
    /**
     * Classifies a numeric status code.
     *
     * # Example
     * ```
     * use agentlink_core::StatusClass;
     *
     * assert_eq!(StatusClass::of(204), StatusClass::Success);
     * assert_eq!(StatusClass::of(503), StatusClass::ServerError);
     * ```
     */
    pub fn of(code: u16) -> Self {
        if is_informational(code) {
            StatusClass::Informational
        } else if is_success(code) {
            StatusClass::Success
        } else if is_redirect(code) {
            StatusClass::Redirect
        } else if is_client_error(code) {
            StatusClass::ClientError
        } else if is_server_error(code) {
            StatusClass::ServerError
        } else {
            StatusClass::Unknown
        }
    }

    /// Whether a reply of this class is worth an error log line.
    pub fn is_error(self) -> bool {
        matches!(self, StatusClass::ClientError | StatusClass::ServerError)
    }
}
