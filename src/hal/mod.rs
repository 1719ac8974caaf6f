//! Hardware Abstraction Layer
//!
//! This module holds the traits the driver uses to reach the hardware around
//! the PD PHY block, plus the concrete implementations shipped with the crate.
//!
//! # Modules
//!
//! - [`regmap`]: Register bus trait and an I2C-backed implementation
//! - [`power`]: Supply rail control
//! - [`irq`]: Interrupt resources, bindings and masking
//! - [`vbus`]: PMIC VBUS (OTG) output regulator
//!
//! # Delay Integration
//!
//! All types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod irq;
pub mod power;
pub mod regmap;
pub mod vbus;

// Re-export commonly used types
pub use irq::{
    InterruptSource, IrqBinding, IrqLine, IrqParams, IrqTable, PM8150B_PDPHY, PdPhyResources,
    PhyEvent,
};
pub use power::{AlwaysOn, PowerControl};
pub use regmap::{I2cRegmap, RegisterBus};
pub use vbus::{VbusRegulator, VbusVariant};
