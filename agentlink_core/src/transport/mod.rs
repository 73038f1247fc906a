/**
 * Transport layer - HTTP delivery to the trace agent.
 *
 * Everything related to *how* we deliver payloads:
 * - `http` - the `Transport` itself and the `Reply` it classifies
 * - `error` - internal failure kinds, collapsed into status codes by `send`
 */

pub mod error;
pub mod http;

pub use error::DeliveryError;
pub use http::{Reply, Transport};
