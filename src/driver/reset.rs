//! Reset sequencer
//!
//! Asserting reset stops any transmit and closes the frame filter; deasserting
//! reopens it for SOP messages and hard reset signals. Failures are logged and
//! not retried: the next reset or enable cycle re-arms the filter.
//!
//! An inbound hard reset is handled out of interrupt context. The dispatcher
//! only queues it; [`PdPhy::run_deferred`] (or the async
//! `PdPhy::reset_worker` with the `async` feature) performs the register
//! cycle and notifies the port.

use super::phy::{PdPhy, PhyRegs};
use super::port::PdPort;
use crate::error::BusResult;
use crate::hal::regmap::RegisterBus;
use crate::internal::registers::{frame_filter, reg};

impl<B: RegisterBus> PhyRegs<B> {
    /// Stop transmit and close the frame filter
    pub(crate) fn assert_reset(&mut self) -> BusResult<()> {
        self.write(reg::TX_CONTROL, 0)?;
        self.write(reg::FRAME_FILTER, 0)
    }

    /// Accept SOP messages and hard reset signals again
    pub(crate) fn deassert_reset(&mut self) -> BusResult<()> {
        self.write(
            reg::FRAME_FILTER,
            frame_filter::EN_SOP | frame_filter::EN_HARD_RESET,
        )
    }

    /// Assert reset, logging a failure
    pub(crate) fn reset_on(&mut self) {
        if let Err(e) = self.assert_reset() {
            error!("pdphy reset assert failed: {}", e);
        }
    }

    /// Deassert reset, logging a failure
    pub(crate) fn reset_off(&mut self) {
        if let Err(e) = self.deassert_reset() {
            error!("pdphy reset deassert failed: {}", e);
        }
    }
}

impl<B: RegisterBus, P, H: PdPort + Clone> PdPhy<B, P, H> {
    /// Run the queued hard-reset reaction, if any.
    ///
    /// Cycles reset under the register lock, then tells the port. Returns
    /// whether a reaction ran.
    pub fn run_deferred(&self) -> bool {
        if !self.reset_work.take() {
            return false;
        }
        self.react_to_hard_reset();
        true
    }

    /// Serve hard-reset reactions forever.
    ///
    /// Spawn this on an executor once after attach.
    #[cfg(feature = "async")]
    pub async fn reset_worker(&self) -> ! {
        loop {
            self.reset_work.wait().await;
            self.react_to_hard_reset();
        }
    }

    fn react_to_hard_reset(&self) {
        self.core.with(|core| {
            core.regs.reset_on();
            core.regs.reset_off();
        });
        info!("pd hard reset received");

        match self.port() {
            Some(port) => port.on_hard_reset(),
            None => warn!("hard reset with no port registered"),
        }
    }
}
