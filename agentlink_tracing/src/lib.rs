/*!
 * agentlink tracing addon - routes transport diagnostics into `tracing`.
 *
 * This crate provides `TracingLogger`, an implementation of
 * `agentlink_core::Logger` that emits every line as a `tracing` event
 * under the `agentlink` target. Whatever subscriber the host application
 * installed decides what is kept, so `RUST_LOG=agentlink=debug` surfaces
 * the per-send debug lines.
 *
 * Events carry an `agent = "{hostname}:{port}"` field when the logger was
 * built with `for_agent`.
 */

use agentlink_core::{LogLevel, Logger};

/// Target every event is emitted under.
pub const TARGET: &str = "agentlink";

// ---------------------------------------------------------------------------
// TracingLogger
// ---------------------------------------------------------------------------

/**
 * `Logger` that forwards to the `tracing` macros.
 *
 * Cheap to clone; holds nothing but the optional agent address used as
 * an event field.
 */
#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    agent: Option<String>,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /**
     * A logger that tags every event with `agent = "{hostname}:{port}"`,
     * handy when several transports share one subscriber.
     */
    pub fn for_agent(hostname: &str, port: u16) -> Self {
        Self {
            agent: Some(format!("{hostname}:{port}")),
        }
    }

    pub fn agent(&self) -> Option<&str> {
        self.agent.as_deref()
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        let agent = self.agent.as_deref().unwrap_or("-");

        match level {
            LogLevel::Debug => tracing::debug!(target: TARGET, agent, "{message}"),
            LogLevel::Info => tracing::info!(target: TARGET, agent, "{message}"),
            LogLevel::Warn => tracing::warn!(target: TARGET, agent, "{message}"),
            LogLevel::Error => tracing::error!(target: TARGET, agent, "{message}"),
        }
    }
}
