//! Register bus abstraction
//!
//! The PD PHY lives inside a PMIC whose registers are reached over a
//! peripheral bus (SPMI, I2C, ...). The driver only needs plain synchronous
//! register primitives, expressed by [`RegisterBus`].
//!
//! [`I2cRegmap`] implements the trait on top of any
//! `embedded_hal::i2c::I2c` bus for PMICs with a 16-bit register address
//! space and 8-bit registers.

use embedded_hal::i2c::{ErrorKind, I2c, Operation};

use crate::error::{BusError, BusResult};

// =============================================================================
// Register Bus Trait
// =============================================================================

/// Trait for register bus operations
///
/// All operations are synchronous and unqueued. Addresses are absolute (the
/// driver adds its block base).
pub trait RegisterBus {
    /// Read a register
    fn read(&mut self, addr: u32) -> BusResult<u32>;

    /// Write a register
    fn write(&mut self, addr: u32, value: u32) -> BusResult<()>;

    /// Read consecutive bytes starting at `addr` into `buf`
    fn bulk_read(&mut self, addr: u32, buf: &mut [u8]) -> BusResult<()>;

    /// Write consecutive bytes starting at `addr`
    fn bulk_write(&mut self, addr: u32, data: &[u8]) -> BusResult<()>;

    /// Read-modify-write the bits selected by `mask`.
    ///
    /// The write is skipped when the register already holds the value.
    fn update_bits(&mut self, addr: u32, mask: u32, value: u32) -> BusResult<()> {
        let current = self.read(addr)?;
        let updated = (current & !mask) | (value & mask);
        if updated == current {
            return Ok(());
        }
        self.write(addr, updated)
    }
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    fn read(&mut self, addr: u32) -> BusResult<u32> {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u32, value: u32) -> BusResult<()> {
        (**self).write(addr, value)
    }

    fn bulk_read(&mut self, addr: u32, buf: &mut [u8]) -> BusResult<()> {
        (**self).bulk_read(addr, buf)
    }

    fn bulk_write(&mut self, addr: u32, data: &[u8]) -> BusResult<()> {
        (**self).bulk_write(addr, data)
    }

    fn update_bits(&mut self, addr: u32, mask: u32, value: u32) -> BusResult<()> {
        (**self).update_bits(addr, mask, value)
    }
}

// =============================================================================
// I2C Backend
// =============================================================================

/// Highest register address reachable with a 16-bit address phase
pub const I2C_MAX_REG_ADDR: u32 = 0xFFFF;

/// [`RegisterBus`] over an I2C device with 16-bit big-endian register
/// addresses and 8-bit registers.
#[derive(Debug)]
pub struct I2cRegmap<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> I2cRegmap<I> {
    /// Wrap an I2C bus talking to the device at 7-bit `address`
    pub fn new(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I {
        self.i2c
    }

    fn reg_addr(addr: u32) -> BusResult<[u8; 2]> {
        if addr > I2C_MAX_REG_ADDR {
            return Err(BusError::InvalidAddress);
        }
        Ok((addr as u16).to_be_bytes())
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(e: &E) -> BusError {
    match e.kind() {
        ErrorKind::NoAcknowledge(_) => BusError::Nack,
        _ => BusError::Transfer,
    }
}

impl<I: I2c> RegisterBus for I2cRegmap<I> {
    fn read(&mut self, addr: u32) -> BusResult<u32> {
        let reg = Self::reg_addr(addr)?;
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &reg, &mut value)
            .map_err(|e| bus_error(&e))?;
        Ok(value[0] as u32)
    }

    fn write(&mut self, addr: u32, value: u32) -> BusResult<()> {
        let [hi, lo] = Self::reg_addr(addr)?;
        self.i2c
            .write(self.address, &[hi, lo, value as u8])
            .map_err(|e| bus_error(&e))
    }

    fn bulk_read(&mut self, addr: u32, buf: &mut [u8]) -> BusResult<()> {
        let reg = Self::reg_addr(addr)?;
        self.i2c
            .write_read(self.address, &reg, buf)
            .map_err(|e| bus_error(&e))
    }

    fn bulk_write(&mut self, addr: u32, data: &[u8]) -> BusResult<()> {
        let reg = Self::reg_addr(addr)?;
        // Adjacent writes in one transaction go out without a repeated start
        let mut ops = [Operation::Write(&reg), Operation::Write(data)];
        self.i2c
            .transaction(self.address, &mut ops)
            .map_err(|e| bus_error(&e))
    }
}
