//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//!
//! # Contents
//!
//! - [`constants`]: Sizes and timing constants
//! - [`registers`]: PD PHY register offsets and bit fields
//! - [`vbus_regs`]: VBUS regulator register offsets and current tables
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. Do not depend on any types
//! or functions in this module from external code.

pub(crate) mod constants;
pub(crate) mod registers;
pub(crate) mod vbus_regs;
