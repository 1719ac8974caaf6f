//! Core driver components for the PMIC PD PHY.
//!
//! This module contains the PHY state and its engines:
//!
//! - [`config`] - Attach-time configuration and lifecycle mode
//! - [`port`] - The upstream port trait
//! - [`phy`] - The [`PdPhy`] driver and attach
//!
//! The transmit, receive, reset, dispatch and lifecycle engines add their
//! operations to [`PdPhy`] from private submodules.
//!
//! # Example
//!
//! ```ignore
//! use pmic_pdphy::driver::{PdPhy, PhyConfig};
//!
//! let config = PhyConfig::new().with_base(0x1700);
//! let phy = PdPhy::attach(bus, supply, config, resolve_irq)?;
//! ```

// Submodules
pub mod config;
pub mod phy;
pub mod port;

mod dispatch;
mod lifecycle;
mod receive;
mod reset;
mod transmit;

// Re-exports for convenience
pub use config::{PhyConfig, PhyMode};
pub use phy::PdPhy;
pub use port::PdPort;
