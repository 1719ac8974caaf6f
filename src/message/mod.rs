//! USB PD message types
//!
//! - [`header`]: The 16-bit message header and the fields it encodes
//! - [`request`]: Transmit requests and completion outcomes
//!
//! [`PdMessage`] is the unit exchanged with the upstream port: a header plus
//! up to seven 32-bit data objects, exactly as the PHY's TX/RX buffers lay
//! them out.

pub mod header;
pub mod request;

pub use header::{DataRole, PdHeader, PowerRole, Revision};
pub use request::{TransmitRequest, TransmitType, TxOutcome};

use crate::error::ProtocolError;
use crate::internal::constants::{
    DATA_OBJECT_LEN, HEADER_LEN, MAX_DATA_OBJECTS, MAX_MESSAGE_LEN, MAX_PAYLOAD_LEN,
};

/// A USB PD message
///
/// The payload length in bytes is always `4 * header.object_count()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PdMessage {
    header: PdHeader,
    payload: [u8; MAX_PAYLOAD_LEN],
}

impl PdMessage {
    /// Build a message from a header and its data objects.
    ///
    /// The number of objects must match the header's object count.
    pub fn new(header: PdHeader, objects: &[u32]) -> Result<Self, ProtocolError> {
        if objects.len() != header.object_count() || objects.len() > MAX_DATA_OBJECTS {
            return Err(ProtocolError::InvalidMessage);
        }

        let mut payload = [0u8; MAX_PAYLOAD_LEN];
        for (chunk, object) in payload.chunks_exact_mut(DATA_OBJECT_LEN).zip(objects) {
            chunk.copy_from_slice(&object.to_le_bytes());
        }

        Ok(Self { header, payload })
    }

    /// Control message (header only)
    pub const fn control(header: PdHeader) -> Self {
        Self {
            header,
            payload: [0u8; MAX_PAYLOAD_LEN],
        }
    }

    /// Decode a message as laid out in the PHY's RX buffer.
    ///
    /// `bytes` holds the header followed by whatever payload the hardware
    /// reported; bytes past the reported length stay zero.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        if bytes.len() < HEADER_LEN || bytes.len() > MAX_MESSAGE_LEN {
            return Err(ProtocolError::InvalidMessage);
        }

        let header = PdHeader::from_le_bytes([bytes[0], bytes[1]]);
        let mut payload = [0u8; MAX_PAYLOAD_LEN];
        let data = &bytes[HEADER_LEN..];
        payload[..data.len()].copy_from_slice(data);

        Ok(Self { header, payload })
    }

    /// Message header
    pub const fn header(&self) -> PdHeader {
        self.header
    }

    /// Payload bytes as sized by the header's object count
    pub fn payload(&self) -> &[u8] {
        &self.payload[..self.payload_len()]
    }

    /// Payload length in bytes
    pub const fn payload_len(&self) -> usize {
        self.header.object_count() * DATA_OBJECT_LEN
    }

    /// Total register transfer length (header + payload)
    pub const fn transfer_len(&self) -> usize {
        HEADER_LEN + self.payload_len()
    }

    /// Data object at `index`, if the header declares it
    pub fn data_object(&self, index: usize) -> Option<u32> {
        if index >= self.header.object_count() {
            return None;
        }
        let start = index * DATA_OBJECT_LEN;
        Some(le_word(&self.payload[start..start + DATA_OBJECT_LEN]))
    }

    /// Iterate over the declared data objects
    pub fn data_objects(&self) -> impl Iterator<Item = u32> + '_ {
        self.payload().chunks_exact(DATA_OBJECT_LEN).map(le_word)
    }
}

fn le_word(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
