//! VBUS (OTG) Regulator Register Definitions
//!
//! Offsets are relative to the regulator block base supplied by the board
//! (`0x1100` on PM8150B).
//!
//! # Module Organization
//!
//! - `reg`: Register offsets
//! - `cmd_otg`: OTG command register bits
//! - `otg_cfg`: OTG configuration register bits
//! - `current`: Current limit tables (µA, indexed by selector)

// =============================================================================
// Register Offsets
// =============================================================================

/// VBUS regulator register offsets
pub mod reg {
    /// OTG command (output enable)
    pub const CMD_OTG: u32 = 0x40;
    /// OTG current limit selector
    pub const OTG_CURRENT_LIMIT_CFG: u32 = 0x52;
    /// OTG configuration
    pub const OTG_CFG: u32 = 0x53;
}

/// CMD_OTG bits
pub mod cmd_otg {
    /// VBUS output enable
    pub const OTG_EN: u32 = 1 << 0;
}

/// OTG_CURRENT_LIMIT_CFG fields
pub mod current_limit_cfg {
    /// Selector mask (bits 2:0)
    pub const MASK: u32 = 0x7;
}

/// OTG_CFG bits
pub mod otg_cfg {
    /// Hardware-controlled VBUS enable; cleared so software owns the output
    pub const OTG_EN_SRC_CFG: u32 = 1 << 1;
}

// =============================================================================
// Current Limit Tables
// =============================================================================

/// Current limit steps in µA, indexed by the selector value
pub mod current {
    /// PM8150B: 500 mA to 3 A in 500 mA steps
    pub const PM8150B_UA: [u32; 6] = [
        500_000, 1_000_000, 1_500_000, 2_000_000, 2_500_000, 3_000_000,
    ];

    /// PMI8998: 250 mA to 2 A in 250 mA steps
    pub const PMI8998_UA: [u32; 8] = [
        250_000, 500_000, 750_000, 1_000_000, 1_250_000, 1_500_000, 1_750_000, 2_000_000,
    ];
}

/// Fixed output voltage in µV
pub const FIXED_UV: u32 = 5_000_000;
