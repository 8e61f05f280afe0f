//! Operation timing instrumentation
//!
//! Optional cross-cutting wrapper around the public service operations: each
//! call is measured wall-clock and the duration handed to a [`MetricsSink`].
//! Services without a configured sink skip recording entirely.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Sink receiving one duration sample per completed operation
pub trait MetricsSink: Send + Sync {
    /// Record the wall-clock duration of one operation
    fn record(&self, operation: &'static str, duration: Duration);
}

/// Sink that emits samples to the tracing log
#[derive(Debug, Clone, Default)]
pub struct LogSink;

impl MetricsSink for LogSink {
    fn record(&self, operation: &'static str, duration: Duration) {
        debug!("{} took {:?}", operation, duration);
    }
}

/// Guard measuring an operation until dropped
///
/// Recording happens on drop, so failed operations are measured like
/// successful ones.
pub(crate) struct Timer {
    operation: &'static str,
    started: Instant,
    sink: Option<Arc<dyn MetricsSink>>,
}

impl Timer {
    /// Start timing an operation; does nothing when `sink` is `None`
    pub(crate) fn start(operation: &'static str, sink: Option<Arc<dyn MetricsSink>>) -> Self {
        Self {
            operation,
            started: Instant::now(),
            sink,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if let Some(sink) = &self.sink {
            sink.record(self.operation, self.started.elapsed());
        }
    }
}

#[cfg(test)]
pub mod recording {
    use super::*;
    use std::sync::Mutex;

    /// Sink collecting samples in memory, for tests
    #[derive(Default)]
    pub struct RecordingSink {
        samples: Mutex<Vec<(&'static str, Duration)>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn samples(&self) -> Vec<(&'static str, Duration)> {
            self.samples.lock().unwrap().clone()
        }
    }

    impl MetricsSink for RecordingSink {
        fn record(&self, operation: &'static str, duration: Duration) {
            self.samples.lock().unwrap().push((operation, duration));
        }
    }
}
