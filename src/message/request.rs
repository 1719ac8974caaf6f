//! Transmit requests and outcomes

use super::header::Revision;
use super::PdMessage;
use crate::error::ProtocolError;

/// Transmit addressing / signal type
///
/// Discriminants are the hardware frame-type encoding used for message
/// transmits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TransmitType {
    /// Port partner
    Sop = 0,
    /// Near-end cable plug
    SopPrime = 1,
    /// Far-end cable plug
    SopPrimePrime = 2,
    /// Near-end debug accessory
    SopDebugPrime = 3,
    /// Far-end debug accessory
    SopDebugPrimePrime = 4,
    /// Hard reset signal
    HardReset = 5,
    /// Cable reset signal
    CableReset = 6,
    /// BIST carrier mode
    Bist = 7,
}

impl TransmitType {
    /// Frame-type field value for message transmits
    pub const fn frame_type(self) -> u32 {
        self as u32
    }

    /// Hard and cable resets are signals that can never carry a message
    pub const fn is_reset_signal(self) -> bool {
        matches!(self, Self::HardReset | Self::CableReset)
    }
}

/// Result of a transmit, reported asynchronously via interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxOutcome {
    /// Message sent and acknowledged
    Success,
    /// Retries exhausted
    Failed,
    /// Dropped because an inbound message arrived first
    Discarded,
}

/// A transmit request from the upstream port
///
/// Either signal-only (no message) or a full message. The negotiated revision
/// selects the retry count for signals; messages use their own header
/// revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransmitRequest<'a> {
    kind: TransmitType,
    message: Option<&'a PdMessage>,
    negotiated: Revision,
}

impl<'a> TransmitRequest<'a> {
    /// Signal-only request, e.g. hard reset
    pub const fn signal(kind: TransmitType, negotiated: Revision) -> Self {
        Self {
            kind,
            message: None,
            negotiated,
        }
    }

    /// Message request. Reset signal types cannot carry a message.
    pub const fn message(
        kind: TransmitType,
        message: &'a PdMessage,
        negotiated: Revision,
    ) -> Result<Self, ProtocolError> {
        if kind.is_reset_signal() {
            return Err(ProtocolError::InvalidRequest);
        }
        Ok(Self {
            kind,
            message: Some(message),
            negotiated,
        })
    }

    /// Transmit type
    pub const fn kind(&self) -> TransmitType {
        self.kind
    }

    /// Message to send, `None` for signal-only requests
    pub const fn payload_message(&self) -> Option<&'a PdMessage> {
        self.message
    }

    /// Revision negotiated for the current session
    pub const fn negotiated(&self) -> Revision {
        self.negotiated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::PdHeader;

    #[test]
    fn frame_type_matches_discriminant() {
        assert_eq!(TransmitType::Sop.frame_type(), 0);
        assert_eq!(TransmitType::SopPrimePrime.frame_type(), 2);
        assert_eq!(TransmitType::Bist.frame_type(), 7);
    }

    #[test]
    fn reset_types_cannot_carry_messages() {
        let msg = PdMessage::control(PdHeader::new(0x1, Revision::Rev20, 0));

        for kind in [TransmitType::HardReset, TransmitType::CableReset] {
            assert_eq!(
                TransmitRequest::message(kind, &msg, Revision::Rev20),
                Err(ProtocolError::InvalidRequest)
            );
        }

        let req = TransmitRequest::message(TransmitType::SopPrime, &msg, Revision::Rev30).unwrap();
        assert_eq!(req.kind(), TransmitType::SopPrime);
        assert_eq!(req.payload_message(), Some(&msg));
        assert_eq!(req.negotiated(), Revision::Rev30);
    }

    #[test]
    fn signal_request_has_no_message() {
        let req = TransmitRequest::signal(TransmitType::HardReset, Revision::Rev30);
        assert!(req.payload_message().is_none());
        assert!(req.kind().is_reset_signal());
    }
}
