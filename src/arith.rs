//! Unsigned arithmetic over 8-bit values and 16-bit addresses
//!
//! Addresses on the target are unsigned 16-bit values, so every comparison
//! between two of them goes through [`gt`] or [`ge`] rather than anything
//! that could be read as a signed compare.

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{Addr, Error};

/// Add two bytes, widening so the result never overflows
pub const fn add(a: u8, b: u8) -> u16 {
    a as u16 + b as u16
}

/// Add two 16-bit values, returning the wrapped sum and the carry flag
pub const fn add_with_carry(a: u16, b: u16) -> (u16, bool) {
    a.overflowing_add(b)
}

/// Offset an address, failing if the sum leaves the 16-bit address space.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the addition carries.
pub const fn checked_address_add(addr: Addr, offset: u16) -> Result<Addr, Error> {
    match add_with_carry(addr, offset) {
        (sum, false) => Ok(sum),
        (_, true) => Err(Error::Overflow),
    }
}

/// Is `a` strictly greater than `b`, as unsigned addresses?
pub const fn gt(a: Addr, b: Addr) -> bool {
    // a > b exactly when b - a borrows
    b.overflowing_sub(a).1
}

/// Is `a` greater than or equal to `b`, as unsigned addresses?
pub const fn ge(a: Addr, b: Addr) -> bool {
    !a.overflowing_sub(b).1
}


// End of File
