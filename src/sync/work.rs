//! Deferred work flag
//!
//! Interrupt handlers must not run long register sequences. [`DeferredWork`]
//! lets a handler queue a follow-up job that a task context picks up later,
//! either by polling [`DeferredWork::take`] or by awaiting
//! [`DeferredWork::wait`] (with the `async` feature).
//!
//! Scheduling while a job is already pending coalesces into one run.

use super::primitives::CriticalSectionCell;
#[cfg(feature = "async")]
use super::primitives::AtomicWaker;

/// Single-slot, coalescing work queue
pub struct DeferredWork {
    pending: CriticalSectionCell<bool>,
    #[cfg(feature = "async")]
    waker: AtomicWaker,
}

impl DeferredWork {
    /// Create an idle work item (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            pending: CriticalSectionCell::new(false),
            #[cfg(feature = "async")]
            waker: AtomicWaker::new(),
        }
    }

    /// Queue the job. Returns `false` if it was already pending.
    pub fn schedule(&self) -> bool {
        let newly = self.pending.with(|p| !core::mem::replace(p, true));
        #[cfg(feature = "async")]
        self.waker.wake();
        newly
    }

    /// Claim the pending job, if any. Clears the flag.
    pub fn take(&self) -> bool {
        self.pending.with(core::mem::take)
    }

    /// Whether a job is queued
    pub fn is_pending(&self) -> bool {
        self.pending.with_ref(|pending| *pending)
    }

    /// Wait until a job is queued, then claim it.
    #[cfg(feature = "async")]
    pub async fn wait(&self) {
        core::future::poll_fn(|cx| {
            self.waker.register(cx.waker());
            if self.take() {
                core::task::Poll::Ready(())
            } else {
                core::task::Poll::Pending
            }
        })
        .await;
    }
}

impl Default for DeferredWork {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for DeferredWork {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeferredWork")
            .field("pending", &self.is_pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_work_is_idle() {
        let work = DeferredWork::new();
        assert!(!work.is_pending());
        assert!(!work.take());
    }

    #[test]
    fn schedule_then_take_runs_once() {
        let work = DeferredWork::new();

        assert!(work.schedule());
        assert!(work.is_pending());
        assert!(work.take());
        assert!(!work.is_pending());
        assert!(!work.take());
    }

    #[test]
    fn repeated_schedule_coalesces() {
        let work = DeferredWork::new();

        assert!(work.schedule());
        assert!(!work.schedule());
        assert!(!work.schedule());

        assert!(work.take());
        assert!(!work.take());
    }

    #[test]
    fn schedule_after_take_queues_again() {
        let work = DeferredWork::new();
        work.schedule();
        work.take();

        assert!(work.schedule());
        assert!(work.is_pending());
    }

    #[cfg(feature = "async")]
    #[test]
    fn wait_completes_when_scheduled() {
        use core::pin::pin;
        use core::task::{Context, Poll, Waker};

        let work = DeferredWork::new();
        let mut cx = Context::from_waker(Waker::noop());
        let mut fut = pin!(work.wait());

        assert!(fut.as_mut().poll(&mut cx).is_pending());
        work.schedule();
        assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(()));
        assert!(!work.is_pending());
    }
}
