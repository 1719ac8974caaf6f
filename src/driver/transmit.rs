//! Transmit engine
//!
//! Signal-only requests (hard reset, cable reset, BIST carrier) write a single
//! control word. Message requests load the TX buffer first and are refused
//! while a received message still owns the RX slot, since the hardware shares
//! one buffer direction at a time.
//!
//! The send bit is always the last register written, so a failed sequence
//! leaves TX_CONTROL cleared.

use super::phy::{PdPhy, PhyRegs};
use crate::error::{ProtocolError, Result};
use crate::hal::regmap::RegisterBus;
use crate::internal::constants::{HEADER_LEN, RETRY_COUNT_LEGACY, RETRY_COUNT_REV30};
use crate::internal::registers::{reg, tx_control};
use crate::message::{PdMessage, Revision, TransmitRequest, TransmitType};

/// Hardware retry count for a session at `revision`
pub(crate) const fn retry_count_for(revision: Option<Revision>) -> u32 {
    match revision {
        Some(Revision::Rev30) => RETRY_COUNT_REV30,
        _ => RETRY_COUNT_LEGACY,
    }
}

impl<B: RegisterBus> PhyRegs<B> {
    /// Clear TX_CONTROL and read it back so the write has landed
    pub(crate) fn clear_tx_control(&mut self) -> Result<()> {
        self.write(reg::TX_CONTROL, 0)?;
        self.read(reg::TX_CONTROL)?;
        Ok(())
    }

    fn send_signal(&mut self, kind: TransmitType, negotiated: Revision) -> Result<()> {
        self.clear_tx_control()?;

        let retry = tx_control::retry_count(retry_count_for(Some(negotiated)));
        let mut val = tx_control::SEND_SIGNAL | retry;
        if kind.is_reset_signal() {
            val |= tx_control::frame_type(tx_control::FRAME_TYPE_RESET_SIGNAL);
        }

        self.write(reg::TX_CONTROL, val)?;
        Ok(())
    }

    fn send_message(&mut self, kind: TransmitType, msg: &PdMessage) -> Result<()> {
        if self.read(reg::RX_ACKNOWLEDGE)? != 0 {
            return Err(ProtocolError::RxPending.into());
        }

        self.clear_tx_control()?;

        let header = msg.header();
        self.bulk_write(reg::TX_BUFFER_HDR, &header.to_le_bytes())?;
        if !msg.payload().is_empty() {
            self.bulk_write(reg::TX_BUFFER_DATA, msg.payload())?;
        }

        // Hardware takes the index of the last byte
        let size = (HEADER_LEN + msg.payload_len() - 1) as u32;
        self.write(reg::TX_SIZE, size)?;

        self.clear_tx_control()?;

        let val = tx_control::frame_type(kind.frame_type())
            | tx_control::SEND_MSG
            | tx_control::retry_count(retry_count_for(header.revision()));
        self.write(reg::TX_CONTROL, val)?;
        Ok(())
    }
}

impl<B: RegisterBus, P, H> PdPhy<B, P, H> {
    /// Start a transmit.
    ///
    /// Returns once the registers are loaded; the outcome is reported later
    /// through [`PdPort::on_transmit_complete`](crate::PdPort::on_transmit_complete).
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::RxPending`] if a received message has not been
    ///   drained yet (message requests only)
    /// - Any register bus error, which aborts the sequence
    pub fn transmit(&self, request: TransmitRequest<'_>) -> Result<()> {
        let kind = request.kind();
        let result = self.core.with(|core| match request.payload_message() {
            None => core.regs.send_signal(kind, request.negotiated()),
            Some(msg) => core.regs.send_message(kind, msg),
        });

        match (&result, request.payload_message()) {
            (Ok(()), _) => debug!(
                "pd tx type {} rev {} queued",
                kind as u8,
                request.negotiated().bits()
            ),
            (Err(e), Some(msg)) => error!(
                "pd tx type {} failed: {}, header {} len {}",
                kind as u8,
                e,
                msg.header().raw(),
                msg.payload_len()
            ),
            (Err(e), None) => error!("pd signal type {} failed: {}", kind as u8, e),
        }

        result
    }
}
