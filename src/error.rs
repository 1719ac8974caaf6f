//! Error types for the PD PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`BusError`]: Register access failures
//! - [`ProtocolError`]: Transmit requests the PHY cannot accept right now
//! - [`PowerError`]: Supply rail failures
//! - [`ConfigError`]: Attach and initialization failures
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.

// =============================================================================
// Bus Errors
// =============================================================================

/// Register bus errors
///
/// Any of these aborts the register sequence that was in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Device did not acknowledge the access
    Nack,
    /// Access did not complete in time
    Timeout,
    /// Generic transfer failure
    Transfer,
    /// Register address outside the bus address space
    InvalidAddress,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BusError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BusError::Nack => "no acknowledge",
            BusError::Timeout => "bus timeout",
            BusError::Transfer => "transfer failed",
            BusError::InvalidAddress => "invalid register address",
        }
    }
}

// =============================================================================
// Protocol Errors
// =============================================================================

/// Transmit path errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// A received message still owns the single hardware RX slot
    RxPending,
    /// Request combines a signal-only transmit type with a message
    InvalidRequest,
    /// Message header and payload disagree, or the message is too long
    InvalidMessage,
}

impl core::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProtocolError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProtocolError::RxPending => "RX message pending",
            ProtocolError::InvalidRequest => "invalid transmit request",
            ProtocolError::InvalidMessage => "invalid PD message",
        }
    }
}

// =============================================================================
// Power Errors
// =============================================================================

/// Supply rail errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerError {
    /// The supply refused to turn on
    SupplyFailed,
    /// Register access to a register-backed supply failed
    Bus(BusError),
    /// No current limit step fits the requested range
    InvalidCurrentLimit,
}

impl core::fmt::Display for PowerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PowerError::Bus(e) => write!(f, "supply bus: {}", e.as_str()),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl PowerError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PowerError::SupplyFailed => "supply enable failed",
            PowerError::Bus(_) => "supply register access failed",
            PowerError::InvalidCurrentLimit => "no matching current limit",
        }
    }
}

impl From<BusError> for PowerError {
    fn from(e: BusError) -> Self {
        PowerError::Bus(e)
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Attach and initialization errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Resource table is empty or has too many interrupt entries
    InvalidResources,
    /// A named interrupt line could not be resolved
    MissingInterrupt,
    /// A port is already registered with the PHY
    AlreadyInitialized,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidResources => "invalid resource table",
            ConfigError::MissingInterrupt => "missing interrupt line",
            ConfigError::AlreadyInitialized => "already initialized",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match phy.transmit(request) {
///     Err(Error::Protocol(ProtocolError::RxPending)) => { /* retry later */ }
///     Err(Error::Bus(_)) => { /* register access failed */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Register bus error
    Bus(BusError),
    /// Protocol error
    Protocol(ProtocolError),
    /// Power supply error
    Power(PowerError),
    /// Configuration error
    Config(ConfigError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus: {}", e.as_str()),
            Error::Protocol(e) => write!(f, "protocol: {}", e.as_str()),
            Error::Power(e) => write!(f, "power: {e}"),
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

impl From<ProtocolError> for Error {
    fn from(e: ProtocolError) -> Self {
        Error::Protocol(e)
    }
}

impl From<PowerError> for Error {
    fn from(e: PowerError) -> Self {
        Error::Power(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// Result type alias for PHY operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for raw register access
pub type BusResult<T> = core::result::Result<T, BusError>;

/// Result type alias for supply operations
pub type PowerResult<T> = core::result::Result<T, PowerError>;

// =============================================================================
// Unit Tests
// =============================================================================
