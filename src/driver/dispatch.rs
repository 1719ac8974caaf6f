//! Event dispatcher
//!
//! Maps an interrupt line to its [`PhyEvent`] and runs the reaction:
//!
//! | Event | Reaction |
//! |---|---|
//! | `SigTx` | logged |
//! | `SigRx` | hard-reset reaction queued |
//! | `MsgTx` / `MsgTxFailed` / `MsgTxDiscarded` | transmit outcome to port |
//! | `MsgRx` | receive engine, message to port |
//! | `MsgRxDiscarded` | logged |
//!
//! Events are not merged or deduplicated. Each port callback happens after
//! the register lock is released.

use super::phy::PdPhy;
use super::port::PdPort;
use crate::hal::irq::{IrqLine, PhyEvent};
use crate::hal::regmap::RegisterBus;
use crate::message::TxOutcome;

impl<B: RegisterBus, P, H: PdPort + Clone> PdPhy<B, P, H> {
    /// Interrupt entry point for every bound line.
    ///
    /// Returns the event handled, or `None` if `line` is not bound.
    pub fn handle_irq(&self, line: IrqLine) -> Option<PhyEvent> {
        let Some(event) = self.irqs.event_for_line(line) else {
            warn!("irq {} not bound to pdphy", line);
            return None;
        };
        self.handle_event(event);
        Some(event)
    }

    /// React to one PHY event.
    pub fn handle_event(&self, event: PhyEvent) {
        trace!("pdphy event {}", event.name());

        match event {
            PhyEvent::SigTx => warn!("unexpected sig-tx"),
            PhyEvent::SigRx => {
                if !self.reset_work.schedule() {
                    debug!("hard reset already pending");
                }
            }
            PhyEvent::MsgTx => self.complete_transmit(TxOutcome::Success),
            PhyEvent::MsgTxFailed => self.complete_transmit(TxOutcome::Failed),
            PhyEvent::MsgTxDiscarded => self.complete_transmit(TxOutcome::Discarded),
            PhyEvent::MsgRx => {
                if let Some(msg) = self.drain_pending() {
                    match self.port() {
                        Some(port) => port.on_receive(&msg),
                        None => warn!("rx with no port registered, dropped"),
                    }
                }
            }
            PhyEvent::MsgRxDiscarded => debug!("msg-rx-discarded ignored"),
        }
    }

    fn complete_transmit(&self, outcome: TxOutcome) {
        match self.port() {
            Some(port) => port.on_transmit_complete(outcome),
            None => warn!("tx completion with no port registered, dropped"),
        }
    }
}
