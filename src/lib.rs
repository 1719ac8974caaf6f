//! PMIC PD PHY Driver
//!
//! A `no_std`, `no_alloc` Rust driver for the USB Power Delivery PHY built into
//! Qualcomm PMICs (PM8150B register layout).
//!
//! The PHY frames outgoing PD messages into device registers, drains incoming
//! messages from device registers and reports transmit, receive and hard-reset
//! events to the PD protocol engine above it (the "port").
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **Driver Layer** ([`driver`]): [`PdPhy`] with its transmit, receive,
//!    reset, dispatch and lifecycle engines
//! 2. **Message Layer** ([`message`]): PD headers, messages and transmit requests
//! 3. **HAL Layer** ([`hal`]): Register bus, supply rail, interrupt lines and
//!    the VBUS regulator
//!
//! ## Concurrency
//!
//! Interrupt handlers and the port's transmit path share the PHY. Every
//! register sequence runs inside one critical section ([`sync`]), port
//! callbacks run after it ends, and the hard-reset reaction is deferred out of
//! interrupt context.
//!
//! # Features
//!
//! - `defmt`: Log through defmt and derive `defmt::Format` for public types
//! - `log`: Log through the `log` facade
//! - `async`: Async hard-reset worker (`PdPhy::reset_worker`)
//!
//! # Example
//!
//! ```ignore
//! use pmic_pdphy::{PdPhy, PhyConfig, TransmitRequest, TransmitType, Revision};
//!
//! let phy = PdPhy::attach(bus, supply, PhyConfig::new().with_base(0x1700), |name| {
//!     irq_controller.lookup(name)
//! })?;
//! phy.initialize(&port, &mut irq_controller, &mut delay)?;
//!
//! // From the port
//! phy.transmit(TransmitRequest::signal(TransmitType::HardReset, Revision::Rev30))?;
//!
//! // From each bound interrupt
//! phy.handle_irq(line);
//!
//! // From a task
//! phy.run_deferred();
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    clippy::let_underscore_future
)]

// Logging macros must be declared before any module that uses them
mod fmt;

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod error;
pub mod hal;
pub mod message;
pub mod sync;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::{PdPhy, PdPort, PhyConfig, PhyMode};
pub use error::{
    BusError, BusResult, ConfigError, Error, PowerError, PowerResult, ProtocolError, Result,
};
pub use hal::{
    InterruptSource, IrqLine, PM8150B_PDPHY, PdPhyResources, PhyEvent, PowerControl, RegisterBus,
};
pub use message::{
    DataRole, PdHeader, PdMessage, PowerRole, Revision, TransmitRequest, TransmitType, TxOutcome,
};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types and integration points.
pub mod constants {
    pub use crate::internal::constants::{
        // Message sizes
        DATA_OBJECT_LEN,
        HEADER_LEN,
        MAX_DATA_OBJECTS,
        // Interrupt resources
        MAX_IRQS,
        MAX_MESSAGE_LEN,
        MAX_PAYLOAD_LEN,
        // Timing
        REINIT_SETTLE_US,
        // Retry counts
        RETRY_COUNT_LEGACY,
        RETRY_COUNT_REV30,
    };
}
