//! Supply rail control
//!
//! The PD PHY is powered from a dedicated PMIC rail (`vdd-pdphy`). The
//! lifecycle controller switches it through [`PowerControl`]; any regulator
//! driver (or the register-backed [`VbusRegulator`](super::vbus::VbusRegulator))
//! can provide it.

use crate::error::PowerResult;

/// Trait for a switchable supply rail
pub trait PowerControl {
    /// Turn the rail on
    fn enable(&mut self) -> PowerResult<()>;

    /// Turn the rail off. Must not fail.
    fn disable(&mut self);
}

impl<T: PowerControl + ?Sized> PowerControl for &mut T {
    fn enable(&mut self) -> PowerResult<()> {
        (**self).enable()
    }

    fn disable(&mut self) {
        (**self).disable();
    }
}

/// Rail that is always on, for boards that hard-wire the PHY supply
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOn;

impl PowerControl for AlwaysOn {
    fn enable(&mut self) -> PowerResult<()> {
        Ok(())
    }

    fn disable(&mut self) {}
}
