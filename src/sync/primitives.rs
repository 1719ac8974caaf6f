//! Interrupt-safe cells behind the PHY register lock, the registered port
//! slot and the deferred reset flag.

use core::cell::RefCell;
#[cfg(feature = "async")]
use core::task::Waker;
use critical_section::Mutex;

/// Value shared between interrupt handlers and task context.
///
/// Every access opens a critical section, so a register sequence run through
/// [`with`](Self::with) is never interleaved with another one. Closures must
/// not re-enter the same cell.
pub struct CriticalSectionCell<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> CriticalSectionCell<T> {
    /// Wrap `value`. Usable in `static` initializers.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Run `f` with exclusive access to the value.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Run `f` with shared access to the value.
    #[inline]
    pub fn with_ref<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        critical_section::with(|cs| f(&self.inner.borrow_ref(cs)))
    }

    /// Take the value back out, e.g. when the PHY is detached.
    pub fn into_inner(self) -> T {
        self.inner.into_inner().into_inner()
    }
}

// SAFETY: all access goes through a critical section, so only one context
// touches the value at a time. `T: Send` is required because that context may
// be an interrupt handler running on behalf of another thread.
unsafe impl<T: Send> Sync for CriticalSectionCell<T> {}

/// Single waker slot filled by a polling task and drained by an interrupt.
#[cfg(feature = "async")]
pub struct AtomicWaker {
    slot: CriticalSectionCell<Option<Waker>>,
}

#[cfg(feature = "async")]
impl AtomicWaker {
    /// Empty slot. Usable in `static` initializers.
    pub const fn new() -> Self {
        Self {
            slot: CriticalSectionCell::new(None),
        }
    }

    /// Store `waker`, replacing any waker for a different task.
    pub fn register(&self, waker: &Waker) {
        self.slot.with(|slot| {
            let same_task = slot.as_ref().is_some_and(|w| w.will_wake(waker));
            if !same_task {
                *slot = Some(waker.clone());
            }
        });
    }

    /// Wake and forget the stored waker.
    #[inline]
    pub fn wake(&self) {
        // Wake outside the critical section.
        if let Some(waker) = self.slot.with(Option::take) {
            waker.wake();
        }
    }
}

#[cfg(feature = "async")]
impl Default for AtomicWaker {
    fn default() -> Self {
        Self::new()
    }
}
