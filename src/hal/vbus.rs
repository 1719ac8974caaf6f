//! VBUS output regulator
//!
//! The PMIC that hosts the PD PHY also drives VBUS when the port acts as a
//! source (OTG). [`VbusRegulator`] switches that output and selects its
//! current limit through the same register bus as the PHY.
//!
//! # Example
//!
//! ```ignore
//! use pmic_pdphy::hal::{VbusRegulator, VbusVariant};
//!
//! let mut vbus = VbusRegulator::new(&bus, 0x1100, VbusVariant::Pm8150b)?;
//! vbus.set_current_limit_ua(500_000, 1_500_000)?;
//! vbus.enable()?;
//! ```

use super::power::PowerControl;
use super::regmap::RegisterBus;
use crate::error::{PowerError, PowerResult};
use crate::internal::vbus_regs::{FIXED_UV, cmd_otg, current, current_limit_cfg, otg_cfg, reg};

/// Supported VBUS regulator variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VbusVariant {
    /// PM8150B (500 mA steps up to 3 A)
    #[default]
    Pm8150b,
    /// PMI8998 (250 mA steps up to 2 A)
    Pmi8998,
}

impl VbusVariant {
    /// Current limit steps in µA, indexed by selector
    pub const fn current_table(self) -> &'static [u32] {
        match self {
            VbusVariant::Pm8150b => &current::PM8150B_UA,
            VbusVariant::Pmi8998 => &current::PMI8998_UA,
        }
    }
}

/// Register-backed VBUS output
#[derive(Debug)]
pub struct VbusRegulator<B> {
    bus: B,
    base: u32,
    variant: VbusVariant,
}

impl<B: RegisterBus> VbusRegulator<B> {
    /// Bind the regulator at `base` and hand VBUS enable over to software.
    pub fn new(mut bus: B, base: u32, variant: VbusVariant) -> PowerResult<Self> {
        let cfg = base + reg::OTG_CFG;
        bus.update_bits(cfg, otg_cfg::OTG_EN_SRC_CFG, 0)?;
        Ok(Self { bus, base, variant })
    }

    /// Regulator variant
    pub fn variant(&self) -> VbusVariant {
        self.variant
    }

    /// Output voltage in µV (fixed)
    pub const fn voltage_uv(&self) -> u32 {
        FIXED_UV
    }

    /// Whether the output is on
    pub fn is_enabled(&mut self) -> PowerResult<bool> {
        let cmd = self.bus.read(self.base + reg::CMD_OTG)?;
        Ok(cmd & cmd_otg::OTG_EN != 0)
    }

    /// Current limit in µA
    pub fn current_limit_ua(&mut self) -> PowerResult<u32> {
        let cfg = self.bus.read(self.base + reg::OTG_CURRENT_LIMIT_CFG)?;
        let sel = cfg & current_limit_cfg::MASK;
        self.variant
            .current_table()
            .get(sel as usize)
            .copied()
            .ok_or(PowerError::InvalidCurrentLimit)
    }

    /// Select the highest current limit within `[min_ua, max_ua]`
    pub fn set_current_limit_ua(&mut self, min_ua: u32, max_ua: u32) -> PowerResult<()> {
        let sel = self
            .variant
            .current_table()
            .iter()
            .enumerate()
            .filter(|&(_, &ua)| (min_ua..=max_ua).contains(&ua))
            .max_by_key(|&(_, &ua)| ua)
            .map(|(sel, _)| sel as u32)
            .ok_or(PowerError::InvalidCurrentLimit)?;

        debug!("vbus current limit selector {}", sel);
        self.bus.update_bits(
            self.base + reg::OTG_CURRENT_LIMIT_CFG,
            current_limit_cfg::MASK,
            sel,
        )?;
        Ok(())
    }

    /// Release the register bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: RegisterBus> PowerControl for VbusRegulator<B> {
    fn enable(&mut self) -> PowerResult<()> {
        let cmd = self.base + reg::CMD_OTG;
        self.bus.update_bits(cmd, cmd_otg::OTG_EN, cmd_otg::OTG_EN)?;
        Ok(())
    }

    fn disable(&mut self) {
        let cmd = self.base + reg::CMD_OTG;
        if let Err(e) = self.bus.update_bits(cmd, cmd_otg::OTG_EN, 0) {
            error!("vbus disable failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BusError;
    use crate::test_utils::{Access, MockRegisterBus};

    const BASE: u32 = 0x1100;

    #[test]
    fn new_clears_hardware_enable_source() {
        let bus = MockRegisterBus::new();
        bus.set_register(BASE + reg::OTG_CFG, 0x03);

        let vbus = VbusRegulator::new(&bus, BASE, VbusVariant::Pm8150b).unwrap();

        assert_eq!(bus.register(BASE + reg::OTG_CFG), 0x01);
        assert_eq!(vbus.variant(), VbusVariant::Pm8150b);
        assert_eq!(vbus.voltage_uv(), 5_000_000);
    }

    #[test]
    fn enable_and_disable_toggle_otg_bit() {
        let bus = MockRegisterBus::new();
        let mut vbus = VbusRegulator::new(&bus, BASE, VbusVariant::Pm8150b).unwrap();

        vbus.enable().unwrap();
        assert!(vbus.is_enabled().unwrap());
        assert_eq!(bus.register(BASE + reg::CMD_OTG), 0x01);

        vbus.disable();
        assert!(!vbus.is_enabled().unwrap());
    }

    #[test]
    fn enable_reports_bus_failure() {
        let bus = MockRegisterBus::new();
        let mut vbus = VbusRegulator::new(&bus, BASE, VbusVariant::Pm8150b).unwrap();
        bus.fail_on(Access::Read, BASE + reg::CMD_OTG);

        assert_eq!(vbus.enable(), Err(PowerError::Bus(BusError::Transfer)));
    }

    #[test]
    fn set_current_limit_picks_highest_step_in_range() {
        let bus = MockRegisterBus::new();
        let mut vbus = VbusRegulator::new(&bus, BASE, VbusVariant::Pm8150b).unwrap();

        vbus.set_current_limit_ua(0, 2_200_000).unwrap();
        assert_eq!(bus.register(BASE + reg::OTG_CURRENT_LIMIT_CFG), 3);
        assert_eq!(vbus.current_limit_ua().unwrap(), 2_000_000);

        vbus.set_current_limit_ua(3_000_000, 3_000_000).unwrap();
        assert_eq!(vbus.current_limit_ua().unwrap(), 3_000_000);
    }

    #[test]
    fn set_current_limit_rejects_range_without_step() {
        let bus = MockRegisterBus::new();
        let mut vbus = VbusRegulator::new(&bus, BASE, VbusVariant::Pm8150b).unwrap();

        assert_eq!(
            vbus.set_current_limit_ua(100_000, 400_000),
            Err(PowerError::InvalidCurrentLimit)
        );
    }

    #[test]
    fn pmi8998_table_uses_quarter_amp_steps() {
        let table = VbusVariant::Pmi8998.current_table();
        assert_eq!(table.len(), 8);
        assert!(table.windows(2).all(|w| w[1] - w[0] == 250_000));

        let bus = MockRegisterBus::new();
        let mut vbus = VbusRegulator::new(&bus, BASE, VbusVariant::Pmi8998).unwrap();
        vbus.set_current_limit_ua(0, 900_000).unwrap();
        assert_eq!(vbus.current_limit_ua().unwrap(), 750_000);
    }

    #[test]
    fn out_of_table_selector_is_reported() {
        let bus = MockRegisterBus::new();
        let mut vbus = VbusRegulator::new(&bus, BASE, VbusVariant::Pm8150b).unwrap();
        bus.set_register(BASE + reg::OTG_CURRENT_LIMIT_CFG, 0x7);

        assert_eq!(
            vbus.current_limit_ua(),
            Err(PowerError::InvalidCurrentLimit)
        );
    }
}
