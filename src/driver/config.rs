//! PHY configuration
//!
//! [`PhyConfig`] carries the values a board supplies once at attach: where the
//! PD PHY block sits in the PMIC register space, which interrupt resource
//! table describes it, and how long to settle between disable and enable.

use crate::hal::irq::{PM8150B_PDPHY, PdPhyResources};
use crate::internal::constants::REINIT_SETTLE_US;

// =============================================================================
// Lifecycle Mode
// =============================================================================

/// Lifecycle mode of the PHY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyMode {
    /// Powered off, frame filter closed
    #[default]
    Disabled,
    /// Power-on sequence in progress
    Enabling,
    /// Running
    Enabled,
    /// Power-off sequence in progress
    Disabling,
    /// Full disable/settle/enable cycle in progress
    Reinitializing,
}

impl PhyMode {
    /// Whether the PHY is running
    pub const fn is_enabled(self) -> bool {
        matches!(self, PhyMode::Enabled)
    }
}

// =============================================================================
// PHY Configuration
// =============================================================================

/// Attach-time configuration
#[derive(Debug, Clone, Copy)]
pub struct PhyConfig {
    /// PD PHY block base address
    base: u32,
    /// Settle time between disable and enable in microseconds
    settle_us: u32,
    /// Interrupt resource table
    resources: &'static PdPhyResources,
}

impl Default for PhyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PhyConfig {
    /// Create a configuration with defaults (base 0, 500 µs settle, PM8150B)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base: 0,
            settle_us: REINIT_SETTLE_US,
            resources: &PM8150B_PDPHY,
        }
    }

    /// Set the block base address
    #[must_use]
    pub const fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Set the reinitialize settle time
    ///
    /// Hardware needs 400-500 µs; shorter values are accepted for simulation.
    #[must_use]
    pub const fn with_settle_us(mut self, settle_us: u32) -> Self {
        self.settle_us = settle_us;
        self
    }

    /// Set the interrupt resource table
    #[must_use]
    pub const fn with_resources(mut self, resources: &'static PdPhyResources) -> Self {
        self.resources = resources;
        self
    }

    /// Block base address
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Reinitialize settle time in microseconds
    pub const fn settle_us(&self) -> u32 {
        self.settle_us
    }

    /// Interrupt resource table
    pub const fn resources(&self) -> &'static PdPhyResources {
        self.resources
    }
}
