//! Cancellable periodic loop scheduling.
//!
//! Both engine loops (per-frame preview projection, 1 Hz sampling) are
//! modeled as a [`LoopHandle`]: a spawned tokio task that invokes a
//! synchronous tick callback at a fixed period. Cancellation aborts the
//! task itself rather than setting a flag the callback would have to
//! check, so once [`LoopHandle::cancel`] returns, no further tick runs —
//! even one already queued by the timer.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Owner handle for a periodic tick task.
///
/// Dropping the handle also aborts the task, so a loop can never outlive
/// the component that started it.
#[derive(Debug)]
pub struct LoopHandle {
    task: JoinHandle<()>,
}

impl LoopHandle {
    /// Spawn a task that invokes `tick` every `period`. Must be called
    /// from within a tokio runtime.
    ///
    /// The first tick fires one full period after the spawn, like a
    /// fixed-interval timer. Ticks that would pile up behind a slow
    /// callback are skipped, not replayed in a burst.
    pub fn every<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                tick();
            }
        });
        Self { task }
    }

    /// Abort the tick task. Unconditional: no tick executes afterwards.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the underlying task has stopped running.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
