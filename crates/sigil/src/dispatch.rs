//! Scheduling of operation work.

use std::sync::Arc;

use sigil_config::{DispatchMode, DispatchSection};
use sigil_crypto::{Operation, OperationError, OperationResult};
use tokio::sync::Semaphore;
use tracing::{Instrument, debug, debug_span, field};

/// Runs operation closures inline or on the blocking pool, bounded by a
/// semaphore.
#[derive(Debug, Clone)]
pub(crate) struct Dispatcher {
    mode: DispatchMode,
    max_in_flight: usize,
    permits: Arc<Semaphore>,
}

impl Dispatcher {
    pub(crate) fn new(section: &DispatchSection) -> Self {
        // A zero-permit semaphore would park every call forever.
        let max_in_flight = section.max_in_flight.max(1);
        Self {
            mode: section.mode,
            max_in_flight,
            permits: Arc::new(Semaphore::new(max_in_flight)),
        }
    }

    pub(crate) fn mode(&self) -> DispatchMode {
        self.mode
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Run `work` for `operation`.
    ///
    /// `message_len` is recorded on the span when known. Keys are never
    /// recorded.
    pub(crate) async fn run<T, F>(
        &self,
        operation: Operation,
        message_len: Option<usize>,
        work: F,
    ) -> OperationResult<T>
    where
        F: FnOnce() -> OperationResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let span = debug_span!(
            "sigil.operation",
            operation = %operation,
            mode = %self.mode,
            message_len = field::Empty,
        );
        if let Some(len) = message_len {
            span.record("message_len", len);
        }

        async move {
            let _permit = Arc::clone(&self.permits)
                .acquire_owned()
                .await
                .map_err(|e| OperationError::Interrupted(e.to_string()))?;

            let result = match self.mode {
                DispatchMode::Inline => work(),
                DispatchMode::Blocking => tokio::task::spawn_blocking(work)
                    .await
                    .map_err(|e| OperationError::Interrupted(format!("blocking task failed: {e}")))?,
            };

            match &result {
                Ok(_) => debug!("operation completed"),
                Err(e) => debug!(kind = %e.kind(), error = %e, "operation failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}
