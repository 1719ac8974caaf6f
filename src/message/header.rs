//! PD message header
//!
//! The header is a 16-bit little-endian control word:
//!
//! | Bits  | Field                              |
//! |-------|------------------------------------|
//! | 4:0   | Message type                       |
//! | 5     | Port data role                     |
//! | 7:6   | Specification revision             |
//! | 8     | Port power role / cable plug       |
//! | 11:9  | Message ID                         |
//! | 14:12 | Number of data objects             |
//! | 15    | Extended                           |

use crate::internal::constants::HEADER_LEN;

const MSG_TYPE_MASK: u16 = 0x1F;
const DATA_ROLE_BIT: u16 = 1 << 5;
const REV_SHIFT: u16 = 6;
const REV_MASK: u16 = 0x3;
const POWER_ROLE_BIT: u16 = 1 << 8;
const MSG_ID_SHIFT: u16 = 9;
const MSG_ID_MASK: u16 = 0x7;
const CNT_SHIFT: u16 = 12;
const CNT_MASK: u16 = 0x7;
const EXTENDED_BIT: u16 = 1 << 15;

// =============================================================================
// Revision
// =============================================================================

/// USB PD specification revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Revision {
    /// PD 1.0
    Rev10 = 0,
    /// PD 2.0
    #[default]
    Rev20 = 1,
    /// PD 3.0, the highest revision this PHY models
    Rev30 = 2,
}

impl Revision {
    /// Decode the 2-bit revision field. `3` is reserved.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Rev10),
            1 => Some(Self::Rev20),
            2 => Some(Self::Rev30),
            _ => None,
        }
    }

    /// Value programmed into header and MSG_CONFIG revision fields
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

// =============================================================================
// Port Roles
// =============================================================================

/// Port data role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRole {
    /// Upstream facing port (device)
    #[default]
    Ufp,
    /// Downstream facing port (host)
    Dfp,
}

/// Port power role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerRole {
    /// Power sink
    #[default]
    Sink,
    /// Power source
    Source,
}

// =============================================================================
// Header
// =============================================================================

/// PD message header word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PdHeader(u16);

impl PdHeader {
    /// Build a header from message type, revision and data object count.
    ///
    /// Fields are truncated to their bit widths.
    pub const fn new(message_type: u8, revision: Revision, object_count: u8) -> Self {
        let raw = (message_type as u16 & MSG_TYPE_MASK)
            | ((revision.bits() as u16 & REV_MASK) << REV_SHIFT)
            | ((object_count as u16 & CNT_MASK) << CNT_SHIFT);
        Self(raw)
    }

    /// Wrap a raw header word
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Decode from the on-wire little-endian bytes
    pub const fn from_le_bytes(bytes: [u8; HEADER_LEN]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Raw header word
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// On-wire little-endian bytes
    pub const fn to_le_bytes(self) -> [u8; HEADER_LEN] {
        self.0.to_le_bytes()
    }

    /// Message type field
    pub const fn message_type(self) -> u8 {
        (self.0 & MSG_TYPE_MASK) as u8
    }

    /// Raw revision field
    pub const fn revision_bits(self) -> u8 {
        ((self.0 >> REV_SHIFT) & REV_MASK) as u8
    }

    /// Decoded revision, `None` for the reserved encoding
    pub const fn revision(self) -> Option<Revision> {
        Revision::from_bits(self.revision_bits())
    }

    /// Number of 32-bit data objects following the header
    pub const fn object_count(self) -> usize {
        ((self.0 >> CNT_SHIFT) & CNT_MASK) as usize
    }

    /// Message ID field
    pub const fn message_id(self) -> u8 {
        ((self.0 >> MSG_ID_SHIFT) & MSG_ID_MASK) as u8
    }

    /// Port data role bit
    pub const fn data_role(self) -> DataRole {
        if self.0 & DATA_ROLE_BIT != 0 {
            DataRole::Dfp
        } else {
            DataRole::Ufp
        }
    }

    /// Port power role bit (cable plug bit for SOP'/SOP'' messages)
    pub const fn power_role(self) -> PowerRole {
        if self.0 & POWER_ROLE_BIT != 0 {
            PowerRole::Source
        } else {
            PowerRole::Sink
        }
    }

    /// Extended message flag
    pub const fn is_extended(self) -> bool {
        self.0 & EXTENDED_BIT != 0
    }

    /// Control messages carry no data objects
    pub const fn is_control(self) -> bool {
        self.object_count() == 0
    }

    /// Set the message ID
    #[must_use]
    pub const fn with_message_id(self, id: u8) -> Self {
        let cleared = self.0 & !(MSG_ID_MASK << MSG_ID_SHIFT);
        Self(cleared | ((id as u16 & MSG_ID_MASK) << MSG_ID_SHIFT))
    }

    /// Set the port data role
    #[must_use]
    pub const fn with_data_role(self, role: DataRole) -> Self {
        match role {
            DataRole::Dfp => Self(self.0 | DATA_ROLE_BIT),
            DataRole::Ufp => Self(self.0 & !DATA_ROLE_BIT),
        }
    }

    /// Set the port power role
    #[must_use]
    pub const fn with_power_role(self, role: PowerRole) -> Self {
        match role {
            PowerRole::Source => Self(self.0 | POWER_ROLE_BIT),
            PowerRole::Sink => Self(self.0 & !POWER_ROLE_BIT),
        }
    }
}
