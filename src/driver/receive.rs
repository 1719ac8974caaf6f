//! Receive engine
//!
//! The PHY has a single RX slot. Once a drain has read a plausible size it
//! always hands the slot back by writing RX_ACKNOWLEDGE, even if the status or
//! buffer read failed; a held slot would block every later message transmit.

use super::phy::{PdPhy, PhyRegs};
use crate::error::Result;
use crate::hal::regmap::RegisterBus;
use crate::internal::constants::{MAX_MESSAGE_LEN, MAX_PAYLOAD_LEN};
use crate::internal::registers::{reg, rx_status};
use crate::message::PdMessage;

impl<B: RegisterBus> PhyRegs<B> {
    fn read_message(&mut self) -> Option<PdMessage> {
        let size = match self.read(reg::RX_SIZE) {
            Ok(size) => size as usize,
            Err(e) => {
                error!("rx size read failed: {}", e);
                return None;
            }
        };

        // A second receive signal can fire before the message is recognized
        if !(1..=MAX_PAYLOAD_LEN).contains(&size) {
            debug!("no usable rx message, size {}", size);
            return None;
        }

        let len = size + 1;
        let mut buf = [0u8; MAX_MESSAGE_LEN];
        let drained = self.read(reg::RX_STATUS).and_then(|status| {
            trace!(
                "rx frame type {} len {}",
                status & rx_status::FRAME_TYPE_MASK,
                len
            );
            self.bulk_read(reg::RX_BUFFER, &mut buf[..len])
        });

        let acked = self.write(reg::RX_ACKNOWLEDGE, 0);

        if let Err(e) = drained.and(acked) {
            error!("rx drain failed: {}", e);
            return None;
        }

        match PdMessage::from_bytes(&buf[..len]) {
            Ok(msg) => Some(msg),
            Err(e) => {
                error!("rx message rejected: {}", e);
                None
            }
        }
    }

    /// Hand the RX slot to hardware (`on`) or hold it so nothing is received
    pub(crate) fn set_receive_enabled(&mut self, on: bool) -> Result<()> {
        self.write(reg::RX_ACKNOWLEDGE, u32::from(!on))?;
        Ok(())
    }
}

impl<B: RegisterBus, P, H> PdPhy<B, P, H> {
    /// Drain the pending received message, if there is a usable one.
    ///
    /// Called by the dispatcher on `MsgRx`; exposed for polled operation.
    pub fn drain_pending(&self) -> Option<PdMessage> {
        self.core.with(|core| core.regs.read_message())
    }

    /// Allow or block reception.
    ///
    /// While blocked, the RX slot stays owned by software and the partner's
    /// messages are not accepted.
    pub fn set_receive_enabled(&self, on: bool) -> Result<()> {
        debug!("pd rx enable {}", on);
        self.core.with(|core| core.regs.set_receive_enabled(on))
    }
}
