/*!
 * Protocol layer - constants and status classification.
 *
 * Everything related to *what* we exchange with the trace agent:
 * - `constants` - timeout, content type, default agent address
 * - `status` - mapping of HTTP status codes onto outcome classes
 */

pub mod constants;
pub mod status;
