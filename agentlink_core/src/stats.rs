/*!
 * Outcome counters shared by every thread using a `Transport`.
 *
 * All four counters live behind a single `Mutex`, so an increment and a
 * snapshot can never interleave: a reader either sees a classification
 * fully applied or not at all. The lock is only ever held for the
 * counter access itself, never across network I/O.
 */
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::protocol::status::StatusClass;

// ---------------------------------------------------------------------------
// Stats - the public snapshot
// ---------------------------------------------------------------------------

/**
 * Point-in-time copy of the transport counters.
 *
 * Serializes with snake_case keys:
 * ```json
 * { "success": 1, "client_error": 0, "server_error": 0, "internal_error": 0 }
 * ```
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// 2xx replies.
    pub success: u64,

    /// 4xx replies.
    pub client_error: u64,

    /// 5xx replies actually sent by the agent.
    pub server_error: u64,

    /// Replies that could not be parsed into a status code.
    pub internal_error: u64,
}

impl Stats {
    /// Sum of all four counters.
    pub fn total(&self) -> u64 {
        self.success + self.client_error + self.server_error + self.internal_error
    }
}

// ---------------------------------------------------------------------------
// Counters - the lock-guarded owner
// ---------------------------------------------------------------------------

/**
 * Monotonic counters owned by a `Transport`.
 *
 * There is no reset: values only grow for the lifetime of the owner.
 */
#[derive(Debug, Default)]
pub(crate) struct Counters {
    inner: Mutex<Stats>,
}

impl Counters {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /**
     * Records one classified reply.
     *
     * Classes without a counter (1xx, 3xx, unknown) are ignored.
     */
    pub(crate) fn record(&self, class: StatusClass) {
        let mut stats = self.lock();
        match class {
            StatusClass::Success => stats.success += 1,
            StatusClass::ClientError => stats.client_error += 1,
            StatusClass::ServerError => stats.server_error += 1,
            StatusClass::Informational | StatusClass::Redirect | StatusClass::Unknown => {}
        }
    }

    /// Records a reply whose status could not be parsed.
    pub(crate) fn record_internal_error(&self) {
        self.lock().internal_error += 1;
    }

    /// Copies all four counters under one lock acquisition.
    pub(crate) fn snapshot(&self) -> Stats {
        *self.lock()
    }

    /*
     * A panic can't happen while the guard is held (plain integer adds),
     * but if the lock is ever poisoned the counters are still consistent.
     */
    fn lock(&self) -> MutexGuard<'_, Stats> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let counters = Counters::new();
        assert_eq!(counters.snapshot(), Stats::default());
        assert_eq!(counters.snapshot().total(), 0);
    }

    #[test]
    fn test_record_touches_only_matching_counter() {
        let counters = Counters::new();

        counters.record(StatusClass::Success);
        counters.record(StatusClass::ClientError);
        counters.record(StatusClass::ClientError);
        counters.record(StatusClass::ServerError);

        assert_eq!(
            counters.snapshot(),
            Stats {
                success: 1,
                client_error: 2,
                server_error: 1,
                internal_error: 0,
            }
        );
    }

    #[test]
    fn test_uncounted_classes_leave_stats_alone() {
        let counters = Counters::new();

        counters.record(StatusClass::Informational);
        counters.record(StatusClass::Redirect);
        counters.record(StatusClass::Unknown);

        assert_eq!(counters.snapshot(), Stats::default());
    }

    #[test]
    fn test_internal_error_has_its_own_counter() {
        let counters = Counters::new();
        counters.record_internal_error();

        let stats = counters.snapshot();
        assert_eq!(stats.internal_error, 1);
        assert_eq!(stats.server_error, 0);
    }

    /**
     * Snapshots taken while writers are running must never go backwards,
     * and no increment may be lost.
     */
    #[test]
    fn test_snapshots_are_monotonic_under_contention() {
        let counters = Arc::new(Counters::new());

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let counters = Arc::clone(&counters);
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        counters.record(StatusClass::Success);
                        counters.record_internal_error();
                    }
                })
            })
            .collect();

        let mut previous = Stats::default();
        for _ in 0..200 {
            let current = counters.snapshot();
            assert!(current.success >= previous.success);
            assert!(current.internal_error >= previous.internal_error);
            previous = current;
        }

        for writer in writers {
            writer.join().unwrap();
        }

        let stats = counters.snapshot();
        assert_eq!(stats.success, 4_000);
        assert_eq!(stats.internal_error, 4_000);
    }

    #[test]
    fn test_serializes_with_snake_case_keys() {
        let stats = Stats {
            success: 3,
            client_error: 2,
            server_error: 1,
            internal_error: 0,
        };

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": 3,
                "client_error": 2,
                "server_error": 1,
                "internal_error": 0
            })
        );
    }
}
