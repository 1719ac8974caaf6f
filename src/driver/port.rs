//! Upstream port interface
//!
//! The PD protocol engine above the PHY implements [`PdPort`]. The driver
//! holds a cloneable handle to it (typically `&Port`) and calls it only after
//! the register lock has been released, so a callback may immediately issue
//! the next transmit.

use crate::message::{PdMessage, TxOutcome};

/// Consumer of PHY events
///
/// Callbacks may run in interrupt context (receive and transmit completion)
/// or in the deferred reset context (hard reset).
pub trait PdPort {
    /// A message was received
    fn on_receive(&self, message: &PdMessage);

    /// The outstanding transmit finished
    fn on_transmit_complete(&self, outcome: TxOutcome);

    /// The partner sent a hard reset and the PHY has been reset
    fn on_hard_reset(&self);
}

impl<T: PdPort + ?Sized> PdPort for &T {
    fn on_receive(&self, message: &PdMessage) {
        (**self).on_receive(message);
    }

    fn on_transmit_complete(&self, outcome: TxOutcome) {
        (**self).on_transmit_complete(outcome);
    }

    fn on_hard_reset(&self) {
        (**self).on_hard_reset();
    }
}
