//! PD PHY driver state
//!
//! [`PdPhy`] owns everything the driver needs after attach: the register bus
//! and supply behind one critical-section lock, the registered port handle,
//! the frozen interrupt table and the deferred hard-reset work item.
//!
//! The engines are split across sibling modules, each adding an `impl` block:
//!
//! - `transmit`: [`PdPhy::transmit`]
//! - `receive`: [`PdPhy::drain_pending`]
//! - `reset`: [`PdPhy::run_deferred`]
//! - `dispatch`: [`PdPhy::handle_irq`], [`PdPhy::handle_event`]
//! - `lifecycle`: enable/disable, initialize/release/detach
//!
//! # Locking
//!
//! Every register sequence runs inside a single critical section on `core`.
//! Port callbacks are made only after that section ends, with a clone of the
//! port handle taken under the (separate) `port` cell.

use super::config::{PhyConfig, PhyMode};
use crate::error::{BusResult, Result};
use crate::hal::irq::{IrqLine, IrqTable};
use crate::hal::regmap::RegisterBus;
use crate::sync::{CriticalSectionCell, DeferredWork};

// =============================================================================
// Register Window
// =============================================================================

/// Register bus plus the PD PHY block base
#[derive(Debug)]
pub(crate) struct PhyRegs<B> {
    pub(crate) bus: B,
    base: u32,
}

impl<B: RegisterBus> PhyRegs<B> {
    pub(crate) fn new(bus: B, base: u32) -> Self {
        Self { bus, base }
    }

    #[inline]
    pub(crate) fn read(&mut self, offset: u32) -> BusResult<u32> {
        self.bus.read(self.base + offset)
    }

    #[inline]
    pub(crate) fn write(&mut self, offset: u32, value: u32) -> BusResult<()> {
        self.bus.write(self.base + offset, value)
    }

    #[inline]
    pub(crate) fn bulk_read(&mut self, offset: u32, buf: &mut [u8]) -> BusResult<()> {
        self.bus.bulk_read(self.base + offset, buf)
    }

    #[inline]
    pub(crate) fn bulk_write(&mut self, offset: u32, data: &[u8]) -> BusResult<()> {
        self.bus.bulk_write(self.base + offset, data)
    }

    #[inline]
    pub(crate) fn update_bits(&mut self, offset: u32, mask: u32, value: u32) -> BusResult<()> {
        self.bus.update_bits(self.base + offset, mask, value)
    }
}

/// State guarded by the register lock
#[derive(Debug)]
pub(crate) struct PhyCore<B, P> {
    pub(crate) regs: PhyRegs<B>,
    pub(crate) power: P,
    pub(crate) mode: PhyMode,
}

// =============================================================================
// PD PHY
// =============================================================================

/// PMIC PD PHY driver
///
/// - `B`: register bus
/// - `P`: PHY supply rail
/// - `H`: upstream port handle, cloned out for each callback (e.g. `&Port`)
///
/// # Example
///
/// ```ignore
/// use pmic_pdphy::{PdPhy, PhyConfig};
///
/// let phy = PdPhy::attach(bus, supply, PhyConfig::new().with_base(0x1700), |name| {
///     board_irq_by_name(name)
/// })?;
/// phy.initialize(&port, &mut irq_controller, &mut delay)?;
///
/// // In each bound interrupt handler
/// phy.handle_irq(line);
///
/// // In a task
/// loop {
///     phy.run_deferred();
/// }
/// ```
pub struct PdPhy<B, P, H> {
    pub(crate) core: CriticalSectionCell<PhyCore<B, P>>,
    pub(crate) port: CriticalSectionCell<Option<H>>,
    pub(crate) irqs: IrqTable,
    pub(crate) reset_work: DeferredWork,
    pub(crate) settle_us: u32,
}

impl<B: RegisterBus, P, H> PdPhy<B, P, H> {
    /// Bind a PHY: resolve every interrupt named in the configured resource
    /// table through `resolve`.
    ///
    /// The PHY stays disabled and every line stays masked until
    /// [`initialize`](Self::initialize).
    pub fn attach<F>(bus: B, power: P, config: PhyConfig, resolve: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<IrqLine>,
    {
        let irqs = IrqTable::from_resources(config.resources(), resolve)?;
        info!("pdphy attached at {}, {} irqs", config.base(), irqs.len());

        Ok(Self {
            core: CriticalSectionCell::new(PhyCore {
                regs: PhyRegs::new(bus, config.base()),
                power,
                mode: PhyMode::Disabled,
            }),
            port: CriticalSectionCell::new(None),
            irqs,
            reset_work: DeferredWork::new(),
            settle_us: config.settle_us(),
        })
    }
}

impl<B, P, H> PdPhy<B, P, H> {
    /// Current lifecycle mode
    pub fn mode(&self) -> PhyMode {
        self.core.with_ref(|core| core.mode)
    }

    /// Interrupt bindings resolved at attach
    pub fn irq_table(&self) -> &IrqTable {
        &self.irqs
    }

    /// Whether a port handle is registered
    pub fn has_port(&self) -> bool {
        self.port.with_ref(Option::is_some)
    }

    /// Whether a hard-reset reaction is queued
    pub fn hard_reset_pending(&self) -> bool {
        self.reset_work.is_pending()
    }
}

impl<B, P, H: Clone> PdPhy<B, P, H> {
    /// Clone of the registered port handle, taken outside the register lock
    pub(crate) fn port(&self) -> Option<H> {
        self.port.with_ref(Option::clone)
    }
}

impl<B, P, H> core::fmt::Debug for PdPhy<B, P, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PdPhy")
            .field("mode", &self.mode())
            .field("irqs", &self.irqs.len())
            .field("has_port", &self.has_port())
            .field("reset_work", &self.reset_work)
            .finish()
    }
}
