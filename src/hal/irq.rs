//! Interrupt resources
//!
//! Each PD PHY event has its own interrupt line. A variant describes its
//! lines by name in a static [`PdPhyResources`] table; at attach time the
//! names are resolved to hardware line numbers and frozen into an
//! [`IrqTable`].
//!
//! Lines start masked. The driver unmasks them through [`InterruptSource`]
//! only after the PHY has completed its first reset/enable cycle.

use crate::error::{ConfigError, Result};
use crate::internal::constants::MAX_IRQS;

/// Hardware interrupt line number
pub type IrqLine = u32;

// =============================================================================
// Events
// =============================================================================

/// PD PHY interrupt events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyEvent {
    /// Ordered-set signal transmitted
    SigTx,
    /// Hard reset signal received
    SigRx,
    /// Message transmitted and acknowledged
    MsgTx,
    /// Message received
    MsgRx,
    /// Message transmit failed after retries
    MsgTxFailed,
    /// Message transmit discarded
    MsgTxDiscarded,
    /// Received message discarded by hardware
    MsgRxDiscarded,
}

impl PhyEvent {
    /// Every event, in resource-table order
    pub const ALL: [PhyEvent; 7] = [
        PhyEvent::SigTx,
        PhyEvent::SigRx,
        PhyEvent::MsgTx,
        PhyEvent::MsgRx,
        PhyEvent::MsgTxFailed,
        PhyEvent::MsgTxDiscarded,
        PhyEvent::MsgRxDiscarded,
    ];

    /// Interrupt name used in resource tables
    pub const fn name(self) -> &'static str {
        match self {
            PhyEvent::SigTx => "sig-tx",
            PhyEvent::SigRx => "sig-rx",
            PhyEvent::MsgTx => "msg-tx",
            PhyEvent::MsgRx => "msg-rx",
            PhyEvent::MsgTxFailed => "msg-tx-failed",
            PhyEvent::MsgTxDiscarded => "msg-tx-discarded",
            PhyEvent::MsgRxDiscarded => "msg-rx-discarded",
        }
    }
}

// =============================================================================
// Interrupt Source Trait
// =============================================================================

/// Trait for the platform interrupt controller
///
/// Handlers registered for each line must call
/// [`PdPhy::handle_irq`](crate::PdPhy::handle_irq) and return promptly.
pub trait InterruptSource {
    /// Mask a line
    fn mask(&mut self, line: IrqLine);

    /// Unmask a line
    fn unmask(&mut self, line: IrqLine);
}

// =============================================================================
// Resource Tables
// =============================================================================

/// One named interrupt of a PD PHY variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IrqParams {
    /// Event signalled by the line
    pub event: PhyEvent,
    /// Line name used for lookup
    pub name: &'static str,
}

/// Static description of a PD PHY variant's interrupts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PdPhyResources {
    /// Interrupt entries (1 to 8)
    pub irqs: &'static [IrqParams],
}

const fn params(event: PhyEvent) -> IrqParams {
    IrqParams {
        event,
        name: event.name(),
    }
}

/// PM8150B PD PHY resources
pub const PM8150B_PDPHY: PdPhyResources = PdPhyResources {
    irqs: &[
        params(PhyEvent::SigTx),
        params(PhyEvent::SigRx),
        params(PhyEvent::MsgTx),
        params(PhyEvent::MsgRx),
        params(PhyEvent::MsgTxFailed),
        params(PhyEvent::MsgTxDiscarded),
        params(PhyEvent::MsgRxDiscarded),
    ],
};

// =============================================================================
// Bound Interrupts
// =============================================================================

/// An event bound to a hardware line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IrqBinding {
    /// Event signalled by the line
    pub event: PhyEvent,
    /// Hardware line number
    pub line: IrqLine,
    /// Line name from the resource table
    pub name: &'static str,
}

/// Immutable, ordered set of bindings built once at attach
#[derive(Debug, Clone, Copy)]
pub struct IrqTable {
    bindings: [Option<IrqBinding>; MAX_IRQS],
    len: usize,
}

impl IrqTable {
    /// Resolve every entry of `resources` with `resolve` (name to line).
    ///
    /// Fails if the table is empty or larger than the hardware limit, or if
    /// any name cannot be resolved.
    pub fn from_resources<F>(resources: &PdPhyResources, mut resolve: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<IrqLine>,
    {
        if resources.irqs.is_empty() || resources.irqs.len() > MAX_IRQS {
            return Err(ConfigError::InvalidResources.into());
        }

        let mut bindings = [None; MAX_IRQS];
        for (slot, params) in bindings.iter_mut().zip(resources.irqs) {
            let Some(line) = resolve(params.name) else {
                error!("irq {} not found", params.name);
                return Err(ConfigError::MissingInterrupt.into());
            };
            *slot = Some(IrqBinding {
                event: params.event,
                line,
                name: params.name,
            });
        }

        Ok(Self {
            bindings,
            len: resources.irqs.len(),
        })
    }

    /// Iterate over bindings in table order
    pub fn iter(&self) -> impl Iterator<Item = &IrqBinding> + '_ {
        self.bindings[..self.len].iter().flatten()
    }

    /// Number of bound lines
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table is empty (never true after a successful attach)
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Event bound to `line`
    pub fn event_for_line(&self, line: IrqLine) -> Option<PhyEvent> {
        self.iter().find(|b| b.line == line).map(|b| b.event)
    }

    /// Line bound to `event`
    pub fn line_for_event(&self, event: PhyEvent) -> Option<IrqLine> {
        self.iter().find(|b| b.event == event).map(|b| b.line)
    }

    /// Mask every bound line
    pub fn mask_all<I: InterruptSource + ?Sized>(&self, irqs: &mut I) {
        for binding in self.iter() {
            irqs.mask(binding.line);
        }
    }

    /// Unmask every bound line
    pub fn unmask_all<I: InterruptSource + ?Sized>(&self, irqs: &mut I) {
        for binding in self.iter() {
            irqs.unmask(binding.line);
        }
    }
}
