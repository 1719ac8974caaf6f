//! Lifecycle controller
//!
//! ```text
//! Disabled -> Enabling -> Enabled -> Disabling -> Disabled
//!                 \-> Disabled (on failure)
//! Enabled -> Reinitializing (disable, settle, enable)
//! ```
//!
//! Enable and disable run entirely inside the register lock, including the
//! supply switch, so no transmit or drain can observe a half-enabled PHY.
//! The reinitialize settle delay is taken outside the lock.

use embedded_hal::delay::DelayNs;

use super::config::PhyMode;
use super::phy::{PdPhy, PhyCore};
use crate::error::{ConfigError, Result};
use crate::hal::irq::InterruptSource;
use crate::hal::power::PowerControl;
use crate::hal::regmap::RegisterBus;
use crate::internal::registers::{en_control, msg_config, reg};
use crate::message::{DataRole, PowerRole, Revision};

impl<B: RegisterBus, P: PowerControl> PhyCore<B, P> {
    fn enable(&mut self) -> Result<()> {
        self.mode = PhyMode::Enabling;

        if let Err(e) = self.power.enable() {
            error!("pdphy supply enable failed: {}", e);
            self.mode = PhyMode::Disabled;
            return Err(e.into());
        }

        if let Err(e) = self.program_enable() {
            error!("pdphy enable failed: {}", e);
            self.power.disable();
            self.mode = PhyMode::Disabled;
            return Err(e);
        }

        self.regs.reset_off();
        self.mode = PhyMode::Enabled;
        Ok(())
    }

    fn program_enable(&mut self) -> Result<()> {
        // Revision 2.0 until the port negotiates otherwise
        self.regs.update_bits(
            reg::MSG_CONFIG,
            msg_config::SPEC_REV_MASK,
            Revision::Rev20.bits() as u32,
        )?;
        self.regs.write(reg::EN_CONTROL, 0)?;
        self.regs.write(reg::EN_CONTROL, en_control::ENABLE)?;
        Ok(())
    }

    fn disable(&mut self) -> Result<()> {
        self.mode = PhyMode::Disabling;

        self.regs.reset_on();
        let result = self.regs.write(reg::EN_CONTROL, 0);
        self.power.disable();
        self.mode = PhyMode::Disabled;

        if let Err(e) = result {
            error!("pdphy disable failed: {}", e);
            return Err(e.into());
        }
        Ok(())
    }
}

impl<B: RegisterBus, P: PowerControl, H> PdPhy<B, P, H> {
    /// Power the PHY on and open the frame filter.
    ///
    /// On any failure the supply is switched back off and the PHY is left
    /// disabled.
    pub fn enable(&self) -> Result<()> {
        self.core.with(PhyCore::enable)
    }

    /// Close the frame filter and power the PHY off.
    ///
    /// The supply is always switched off; the returned error reports a failed
    /// enable-control write.
    pub fn disable(&self) -> Result<()> {
        self.core.with(PhyCore::disable)
    }

    /// Full power cycle: disable, settle, enable.
    ///
    /// Stops without enabling if the disable step fails.
    pub fn reinitialize<D: DelayNs>(&self, delay: &mut D) -> Result<()> {
        self.disable()?;

        self.core.with(|core| core.mode = PhyMode::Reinitializing);
        delay.delay_us(self.settle_us);

        self.enable()
    }

    /// Register the port, bring the PHY up and unmask its interrupts.
    ///
    /// Lines are unmasked only after the PHY has come up; if it fails to,
    /// the port is unregistered again and every line stays masked.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::AlreadyInitialized`] if a port is registered
    /// - Errors from [`reinitialize`](Self::reinitialize)
    pub fn initialize<I, D>(&self, port: H, irqs: &mut I, delay: &mut D) -> Result<()>
    where
        I: InterruptSource + ?Sized,
        D: DelayNs,
    {
        let registered = self.port.with(|slot| {
            if slot.is_some() {
                return false;
            }
            *slot = Some(port);
            true
        });
        if !registered {
            return Err(ConfigError::AlreadyInitialized.into());
        }

        if let Err(e) = self.reinitialize(delay) {
            self.port.with(|slot| *slot = None);
            return Err(e);
        }

        self.irqs.unmask_all(irqs);
        info!("pdphy initialized");
        Ok(())
    }

    /// Unregister the port. Later events are dropped.
    pub fn release(&self) -> Option<H> {
        self.port.with(Option::take)
    }

    /// Mask every line, hold the PHY in reset and give back the bus and
    /// supply.
    pub fn detach<I: InterruptSource + ?Sized>(self, irqs: &mut I) -> (B, P) {
        self.irqs.mask_all(irqs);
        self.core.with(|core| core.regs.reset_on());

        let core = self.core.into_inner();
        info!("pdphy detached");
        (core.regs.bus, core.power)
    }
}

impl<B: RegisterBus, P, H> PdPhy<B, P, H> {
    /// Program the port roles used in outgoing GoodCRC replies
    pub fn set_roles(&self, data_role: DataRole, power_role: PowerRole) -> Result<()> {
        let mut value = 0;
        if data_role == DataRole::Dfp {
            value |= msg_config::PORT_DATA_ROLE;
        }
        if power_role == PowerRole::Source {
            value |= msg_config::PORT_POWER_ROLE;
        }

        debug!(
            "pd roles data {} power {}",
            data_role as u8,
            power_role as u8
        );
        self.core.with(|core| {
            core.regs.update_bits(
                reg::MSG_CONFIG,
                msg_config::PORT_DATA_ROLE | msg_config::PORT_POWER_ROLE,
                value,
            )
        })?;
        Ok(())
    }
}
