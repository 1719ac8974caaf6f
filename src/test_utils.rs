//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PD PHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::vec::Vec;

use embedded_hal::i2c::{self, ErrorKind, NoAcknowledgeSource, Operation};

use crate::driver::{PdPhy, PdPort, PhyConfig};
use crate::error::{BusError, BusResult, PowerError, PowerResult};
use crate::hal::irq::{InterruptSource, IrqLine, PhyEvent};
use crate::hal::power::PowerControl;
use crate::hal::regmap::RegisterBus;
use crate::message::{PdMessage, TxOutcome};

/// PD PHY block base used by driver tests (PM8150B)
pub const TEST_BASE: u32 = 0x1700;

// =============================================================================
// Mock Register Bus
// =============================================================================

/// Register access kind, for fail injection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
    BulkRead,
    BulkWrite,
}

/// One journaled bus operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusOp {
    Read(u32),
    Write(u32, u32),
    BulkRead(u32, usize),
    BulkWrite(u32, Vec<u8>),
}

/// Mock register bus for testing register sequences without hardware
///
/// Registers read as 0 until set. Every access is journaled, including
/// accesses that were made to fail.
///
/// # Example
///
/// ```ignore
/// let bus = MockRegisterBus::new();
/// bus.set_register(0x174B, 1); // RX slot held
///
/// let phy = attach_test_phy::<&MockPort>(&bus, &power);
/// assert!(phy.transmit(request).is_err());
/// ```
#[derive(Debug, Default)]
pub struct MockRegisterBus {
    /// Register values: addr -> value
    registers: RefCell<HashMap<u32, u32>>,
    /// Bulk buffers: start addr -> bytes
    buffers: RefCell<HashMap<u32, Vec<u8>>>,
    /// Journal of every access
    ops: RefCell<Vec<BusOp>>,
    /// Accesses that fail with `BusError::Transfer`
    failures: RefCell<Vec<(Access, u32)>>,
}

impl MockRegisterBus {
    /// Create a new mock register bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, addr: u32, value: u32) {
        self.registers.borrow_mut().insert(addr, value);
    }

    /// Current register value (0 if never written)
    pub fn register(&self, addr: u32) -> u32 {
        self.registers.borrow().get(&addr).copied().unwrap_or(0)
    }

    /// Set the bytes a bulk read at `addr` returns
    pub fn set_buffer(&self, addr: u32, data: &[u8]) {
        self.buffers.borrow_mut().insert(addr, data.to_vec());
    }

    /// Bytes last bulk-written at `addr`
    pub fn buffer(&self, addr: u32) -> Vec<u8> {
        let buffers = self.buffers.borrow();
        buffers.get(&addr).cloned().unwrap_or_default()
    }

    /// All accesses, in order
    pub fn ops(&self) -> Vec<BusOp> {
        self.ops.borrow().clone()
    }

    /// Single-register writes as (addr, value), in order
    pub fn writes(&self) -> Vec<(u32, u32)> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                BusOp::Write(addr, value) => Some((*addr, *value)),
                _ => None,
            })
            .collect()
    }

    /// Clear the journal
    pub fn clear_ops(&self) {
        self.ops.borrow_mut().clear();
    }

    /// Make every `access` to `addr` fail
    pub fn fail_on(&self, access: Access, addr: u32) {
        self.failures.borrow_mut().push((access, addr));
    }

    /// Remove all injected failures
    pub fn clear_failures(&self) {
        self.failures.borrow_mut().clear();
    }

    fn record(&self, op: BusOp, access: Access, addr: u32) -> BusResult<()> {
        self.ops.borrow_mut().push(op);
        if self.failures.borrow().contains(&(access, addr)) {
            return Err(BusError::Transfer);
        }
        Ok(())
    }
}

impl RegisterBus for &MockRegisterBus {
    fn read(&mut self, addr: u32) -> BusResult<u32> {
        self.record(BusOp::Read(addr), Access::Read, addr)?;
        Ok(self.register(addr))
    }

    fn write(&mut self, addr: u32, value: u32) -> BusResult<()> {
        self.record(BusOp::Write(addr, value), Access::Write, addr)?;
        self.set_register(addr, value);
        Ok(())
    }

    fn bulk_read(&mut self, addr: u32, buf: &mut [u8]) -> BusResult<()> {
        let op = BusOp::BulkRead(addr, buf.len());
        self.record(op, Access::BulkRead, addr)?;
        buf.fill(0);
        if let Some(data) = self.buffers.borrow().get(&addr) {
            let n = data.len().min(buf.len());
            buf[..n].copy_from_slice(&data[..n]);
        }
        Ok(())
    }

    fn bulk_write(&mut self, addr: u32, data: &[u8]) -> BusResult<()> {
        let op = BusOp::BulkWrite(addr, data.to_vec());
        self.record(op, Access::BulkWrite, addr)?;
        self.set_buffer(addr, data);
        Ok(())
    }
}

// =============================================================================
// Mock I2C Device
// =============================================================================

/// Mock I2C device with a 16-bit auto-incrementing register pointer
///
/// The first two bytes written in a transaction set the pointer; further
/// written bytes are stored, reads return stored bytes (0 if unset).
#[derive(Debug, Default)]
pub struct MockI2c {
    address: u8,
    memory: HashMap<u16, u8>,
}

impl MockI2c {
    /// Create a device answering at 7-bit `address`
    pub fn new(address: u8) -> Self {
        Self {
            address,
            memory: HashMap::new(),
        }
    }

    /// Preset a register byte
    pub fn set_memory(&mut self, addr: u16, value: u8) {
        self.memory.insert(addr, value);
    }

    /// Current register byte
    pub fn memory(&self, addr: u16) -> u8 {
        self.memory.get(&addr).copied().unwrap_or(0)
    }
}

impl i2c::ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl i2c::I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        let mut pointer_bytes: Vec<u8> = Vec::new();
        let mut pointer: u16 = 0;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    for &byte in bytes.iter() {
                        if pointer_bytes.len() < 2 {
                            pointer_bytes.push(byte);
                            if pointer_bytes.len() == 2 {
                                pointer = u16::from_be_bytes([pointer_bytes[0], pointer_bytes[1]]);
                            }
                        } else {
                            self.memory.insert(pointer, byte);
                            pointer = pointer.wrapping_add(1);
                        }
                    }
                }
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = self.memory(pointer);
                        pointer = pointer.wrapping_add(1);
                    }
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Mock Power
// =============================================================================

/// Mock supply rail counting enable/disable calls
#[derive(Debug, Default)]
pub struct MockPower {
    enabled: Cell<bool>,
    fail_enable: Cell<bool>,
    enable_count: Cell<u32>,
    disable_count: Cell<u32>,
}

impl MockPower {
    /// Create a rail that starts off
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `enable` fail with `PowerError::SupplyFailed`
    pub fn fail_enable(&self, fail: bool) {
        self.fail_enable.set(fail);
    }

    /// Whether the rail is on
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Number of enable calls
    pub fn enable_count(&self) -> u32 {
        self.enable_count.get()
    }

    /// Number of disable calls
    pub fn disable_count(&self) -> u32 {
        self.disable_count.get()
    }
}

impl PowerControl for &MockPower {
    fn enable(&mut self) -> PowerResult<()> {
        self.enable_count.set(self.enable_count.get() + 1);
        if self.fail_enable.get() {
            return Err(PowerError::SupplyFailed);
        }
        self.enabled.set(true);
        Ok(())
    }

    fn disable(&mut self) {
        self.disable_count.set(self.disable_count.get() + 1);
        self.enabled.set(false);
    }
}

// =============================================================================
// Mock Port
// =============================================================================

/// Callback recorded by [`MockPort`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortEvent {
    Received(PdMessage),
    TxComplete(TxOutcome),
    HardReset,
}

/// Mock upstream port recording every callback
#[derive(Debug, Default)]
pub struct MockPort {
    events: RefCell<Vec<PortEvent>>,
}

impl MockPort {
    /// Create a port with no recorded events
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks received so far
    pub fn events(&self) -> Vec<PortEvent> {
        self.events.borrow().clone()
    }

    fn push(&self, event: PortEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PdPort for MockPort {
    fn on_receive(&self, message: &PdMessage) {
        self.push(PortEvent::Received(*message));
    }

    fn on_transmit_complete(&self, outcome: TxOutcome) {
        self.push(PortEvent::TxComplete(outcome));
    }

    fn on_hard_reset(&self) {
        self.push(PortEvent::HardReset);
    }
}

// =============================================================================
// Mock Interrupt Source
// =============================================================================

/// Mock interrupt controller; every line starts masked
#[derive(Debug, Default)]
pub struct MockInterruptSource {
    unmasked_lines: HashMap<IrqLine, bool>,
    mask_log: Vec<IrqLine>,
    unmask_log: Vec<IrqLine>,
}

impl MockInterruptSource {
    /// Create a controller with every line masked
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `line` is currently masked
    pub fn is_masked(&self, line: IrqLine) -> bool {
        !self.unmasked_lines.get(&line).copied().unwrap_or(false)
    }

    /// Lines passed to `mask`, in order
    pub fn masked(&self) -> Vec<IrqLine> {
        self.mask_log.clone()
    }

    /// Lines passed to `unmask`, in order
    pub fn unmasked(&self) -> Vec<IrqLine> {
        self.unmask_log.clone()
    }
}

impl InterruptSource for MockInterruptSource {
    fn mask(&mut self, line: IrqLine) {
        self.unmasked_lines.insert(line, false);
        self.mask_log.push(line);
    }

    fn unmask(&mut self, line: IrqLine) {
        self.unmasked_lines.insert(line, true);
        self.unmask_log.push(line);
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total microseconds that were "delayed"
    pub fn total_us(&self) -> u64 {
        self.total_ns() / 1_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }
}

// =============================================================================
// Driver Helpers
// =============================================================================

/// Resolve PM8150B interrupt names to lines 100..=106, in event order
pub fn test_resolver(name: &str) -> Option<IrqLine> {
    PhyEvent::ALL
        .iter()
        .position(|event| event.name() == name)
        .map(|index| 100 + index as IrqLine)
}

/// Attach a PM8150B PHY at [`TEST_BASE`] on mock bus and supply
pub fn attach_test_phy<'a, H>(
    bus: &'a MockRegisterBus,
    power: &'a MockPower,
) -> PdPhy<&'a MockRegisterBus, &'a MockPower, H> {
    let config = PhyConfig::new().with_base(TEST_BASE);
    PdPhy::attach(bus, power, config, test_resolver)
        .expect("PM8150B resources resolve")
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;
    use embedded_hal::i2c::I2c;
    use std::vec;

    #[test]
    fn mock_bus_read_write() {
        let bus = MockRegisterBus::new();
        let mut handle = &bus;

        // Initially reads 0
        assert_eq!(handle.read(0x10), Ok(0));

        handle.write(0x10, 0x5A).unwrap();
        assert_eq!(handle.read(0x10), Ok(0x5A));

        assert_eq!(
            bus.ops(),
            vec![BusOp::Read(0x10), BusOp::Write(0x10, 0x5A), BusOp::Read(0x10)]
        );
        assert_eq!(bus.writes(), vec![(0x10, 0x5A)]);
    }

    #[test]
    fn mock_bus_fail_injection_is_journaled() {
        let bus = MockRegisterBus::new();
        let mut handle = &bus;
        bus.fail_on(Access::Write, 0x20);

        assert_eq!(handle.write(0x20, 1), Err(BusError::Transfer));
        assert_eq!(bus.register(0x20), 0);
        assert_eq!(bus.writes(), vec![(0x20, 1)]);

        bus.clear_failures();
        handle.write(0x20, 1).unwrap();
        assert_eq!(bus.register(0x20), 1);
    }

    #[test]
    fn mock_bus_bulk_buffers() {
        let bus = MockRegisterBus::new();
        let mut handle = &bus;
        bus.set_buffer(0x80, &[1, 2, 3]);

        let mut buf = [0xFFu8; 5];
        handle.bulk_read(0x80, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 0, 0]);

        handle.bulk_write(0x60, &[9, 8]).unwrap();
        assert_eq!(bus.buffer(0x60), vec![9, 8]);
    }

    #[test]
    fn mock_i2c_pointer_auto_increments() {
        let mut i2c = MockI2c::new(0x08);

        i2c.write(0x08, &[0x12, 0x34, 0xAA, 0xBB]).unwrap();
        assert_eq!(i2c.memory(0x1234), 0xAA);
        assert_eq!(i2c.memory(0x1235), 0xBB);

        let mut buf = [0u8; 2];
        i2c.write_read(0x08, &[0x12, 0x34], &mut buf).unwrap();
        assert_eq!(buf, [0xAA, 0xBB]);

        assert_eq!(
            i2c.write(0x09, &[0, 0]),
            Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
        );
    }

    #[test]
    fn mock_power_counts_calls() {
        let power = MockPower::new();
        let mut handle = &power;

        handle.enable().unwrap();
        assert!(power.is_enabled());

        power.fail_enable(true);
        assert_eq!(handle.enable(), Err(PowerError::SupplyFailed));
        handle.disable();

        assert!(!power.is_enabled());
        assert_eq!(power.enable_count(), 2);
        assert_eq!(power.disable_count(), 1);
    }

    #[test]
    fn mock_interrupts_start_masked() {
        let mut irqs = MockInterruptSource::new();
        assert!(irqs.is_masked(5));

        irqs.unmask(5);
        assert!(!irqs.is_masked(5));

        irqs.mask(5);
        assert!(irqs.is_masked(5));
        assert_eq!(irqs.unmasked(), vec![5]);
        assert_eq!(irqs.masked(), vec![5]);
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        delay.delay_ns(1000);
        delay.delay_us(2);

        assert_eq!(delay.total_ns(), 3000);
        assert_eq!(delay.total_us(), 3);
    }

    #[test]
    fn resolver_covers_pm8150b_names() {
        assert_eq!(test_resolver("sig-tx"), Some(100));
        assert_eq!(test_resolver("msg-rx-discarded"), Some(106));
        assert_eq!(test_resolver("vbus"), None);
    }
}
