/*!
 * Logging capability handed to a `Transport` at construction.
 *
 * The transport never reaches for a global logger: whoever builds it
 * decides where diagnostics go. Log output is a side channel only -
 * failures are reported here instead of being raised to the caller.
 *
 * Implementations shipped here:
 * - `StderrLogger` - `[agentlink] LEVEL message` lines on stderr
 * - `NoopLogger` - discards everything
 *
 * The `agentlink_tracing` crate adds a `tracing`-backed implementation.
 */
use std::fmt;

// ---------------------------------------------------------------------------
// LogLevel
// ---------------------------------------------------------------------------

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

/**
 * Sink for the transport's diagnostic lines.
 *
 * Must be `Send + Sync`: a single `Transport` is shared by every thread
 * that emits payloads, and all of them log through the same instance.
 */
pub trait Logger: Send + Sync {
    /// Emits one line at the given level.
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

// ---------------------------------------------------------------------------
// StderrLogger
// ---------------------------------------------------------------------------

/**
 * Writes `[agentlink] LEVEL message` lines to stderr.
 *
 * Debug lines are dropped unless the logger was built with `verbose()`,
 * so the default transport stays quiet on the happy path.
 */
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogger {
    verbose: bool,
}

impl StderrLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A logger that also prints debug lines.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        self.verbose || level > LogLevel::Debug
    }
}

impl Logger for StderrLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            eprintln!("[agentlink] {level} {message}");
        }
    }
}

// ---------------------------------------------------------------------------
// NoopLogger
// ---------------------------------------------------------------------------

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}
