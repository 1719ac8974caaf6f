//! Synchronization and Concurrency Support
//!
//! This module provides the synchronization primitives shared by interrupt
//! handlers, the upstream port and the deferred reset worker:
//!
//! - **Primitives** (`primitives`): Low-level synchronization types
//!   - [`CriticalSectionCell`] - ISR-safe interior mutability
//!   - `AtomicWaker` - Async waker storage for interrupts (`async` only)
//!
//! - **Deferred work** (`work`): [`DeferredWork`], a coalescing single-slot
//!   job flag set from interrupt context and drained from task context
//!
//! # Example
//!
//! ```ignore
//! use pmic_pdphy::sync::DeferredWork;
//!
//! static WORK: DeferredWork = DeferredWork::new();
//!
//! fn irq_handler() {
//!     WORK.schedule();
//! }
//!
//! fn main_loop() {
//!     if WORK.take() {
//!         // slow follow-up
//!     }
//! }
//! ```

mod primitives;
mod work;

#[cfg(feature = "async")]
pub use primitives::AtomicWaker;
pub use primitives::CriticalSectionCell;
pub use work::DeferredWork;
