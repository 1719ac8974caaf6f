//! PD PHY Register Definitions
//!
//! Register offsets are relative to the PD PHY block base address supplied
//! at attach time (`0x1700` on PM8150B).
//!
//! # Module Organization
//!
//! - `reg`: Register offsets
//! - `msg_config`: Message configuration register bits
//! - `tx_control`: Transmit control register fields
//! - `en_control`: Enable control register bits
//! - `frame_filter`: Receive frame filter bits
//! - `rx_status`: Receive status fields

#![allow(dead_code)]

// =============================================================================
// Register Offsets
// =============================================================================

/// PD PHY register offsets
pub mod reg {
    /// Message configuration (spec revision, port roles)
    pub const MSG_CONFIG: u32 = 0x40;
    /// Transmit size: total length minus one
    pub const TX_SIZE: u32 = 0x42;
    /// Transmit control
    pub const TX_CONTROL: u32 = 0x44;
    /// PHY enable control
    pub const EN_CONTROL: u32 = 0x46;
    /// Received message size: total length minus one
    pub const RX_SIZE: u32 = 0x48;
    /// Receive status (frame type of the last message)
    pub const RX_STATUS: u32 = 0x4A;
    /// Receive buffer ownership token
    pub const RX_ACKNOWLEDGE: u32 = 0x4B;
    /// Accepted inbound frame types
    pub const FRAME_FILTER: u32 = 0x4C;
    /// Transmit buffer: message header
    pub const TX_BUFFER_HDR: u32 = 0x60;
    /// Transmit buffer: data objects
    pub const TX_BUFFER_DATA: u32 = 0x62;
    /// Receive buffer (header followed by data objects)
    pub const RX_BUFFER: u32 = 0x80;
}

/// MSG_CONFIG bits
pub mod msg_config {
    /// Port data role: 1 = DFP (host)
    pub const PORT_DATA_ROLE: u32 = 1 << 3;
    /// Port power role: 1 = source
    pub const PORT_POWER_ROLE: u32 = 1 << 2;
    /// Spec revision field mask (bits 1:0)
    pub const SPEC_REV_MASK: u32 = 0x3;
}

/// TX_CONTROL fields
pub mod tx_control {
    /// Retry count field shift (bits 6:5)
    pub const RETRY_COUNT_SHIFT: u32 = 5;
    /// Retry count field mask
    pub const RETRY_COUNT_MASK: u32 = 0x3 << RETRY_COUNT_SHIFT;
    /// Frame type field shift (bits 4:2)
    pub const FRAME_TYPE_SHIFT: u32 = 2;
    /// Frame type field mask
    pub const FRAME_TYPE_MASK: u32 = 0x7 << FRAME_TYPE_SHIFT;
    /// Frame type value selecting a reset signal (hard or cable reset)
    pub const FRAME_TYPE_RESET_SIGNAL: u32 = 1;
    /// Send an ordered-set signal
    pub const SEND_SIGNAL: u32 = 1 << 1;
    /// Send the message in the TX buffer
    pub const SEND_MSG: u32 = 1 << 0;

    /// Encode a retry count into the TX_CONTROL field
    #[inline(always)]
    pub const fn retry_count(n: u32) -> u32 {
        (n << RETRY_COUNT_SHIFT) & RETRY_COUNT_MASK
    }

    /// Encode a frame type into the TX_CONTROL field
    #[inline(always)]
    pub const fn frame_type(n: u32) -> u32 {
        (n << FRAME_TYPE_SHIFT) & FRAME_TYPE_MASK
    }
}

/// EN_CONTROL bits
pub mod en_control {
    /// PHY run bit
    pub const ENABLE: u32 = 1 << 0;
}

/// FRAME_FILTER bits
pub mod frame_filter {
    /// Accept SOP frames
    pub const EN_SOP: u32 = 1 << 0;
    /// Accept hard reset signals
    pub const EN_HARD_RESET: u32 = 1 << 5;
}

/// RX_STATUS fields
pub mod rx_status {
    /// Frame type of the received message (bits 2:0)
    pub const FRAME_TYPE_MASK: u32 = 0x7;
}
