//! Centralized Constants
//!
//! Message dimensions and timing values used throughout the driver.
//! Register offsets and bit definitions live in [`super::registers`].

// =============================================================================
// Message Sizes
// =============================================================================

/// PD message header length in bytes
pub const HEADER_LEN: usize = 2;

/// Maximum number of 32-bit data objects in a PD message
pub const MAX_DATA_OBJECTS: usize = 7;

/// Size of one data object in bytes
pub const DATA_OBJECT_LEN: usize = 4;

/// Maximum payload length in bytes (7 data objects)
pub const MAX_PAYLOAD_LEN: usize = MAX_DATA_OBJECTS * DATA_OBJECT_LEN;

/// Maximum total message length (header + payload)
pub const MAX_MESSAGE_LEN: usize = HEADER_LEN + MAX_PAYLOAD_LEN;

// =============================================================================
// Interrupt Resources
// =============================================================================

/// Maximum number of interrupt lines a PD PHY variant can bind
pub const MAX_IRQS: usize = 8;

// =============================================================================
// Timing Constants
// =============================================================================

/// Settle time between disable and re-enable during a full reinitialize.
///
/// Hardware needs 400-500 µs.
pub const REINIT_SETTLE_US: u32 = 500;

// =============================================================================
// Retry Counts
// =============================================================================

/// Hardware retry count for PD 3.0 sessions
pub const RETRY_COUNT_REV30: u32 = 2;

/// Hardware retry count for PD 1.0 / 2.0 sessions
pub const RETRY_COUNT_LEGACY: u32 = 3;
