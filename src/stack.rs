//! Holds the [`Stack`] type and methods

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{Addr, Error, arith};

/// The cursors that describe where a [`Stack`] lives in its backing array.
///
/// Field order matches the on-target layout, see [`crate::layout`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(C)]
pub struct StackCursors {
    /// One slot above the highest valid data slot
    pub top_sentinel: Addr,
    /// The lowest valid slot
    pub bottom: Addr,
    /// The slot holding the most recent push, or `top_sentinel` if empty
    pub top: Addr,
}

/// A full-descending byte stack, with a backing array of `N` bytes.
///
/// The stack grows from `top_sentinel` down towards `bottom`. It is empty
/// when `top == top_sentinel` and full when `top == bottom`, so no separate
/// count is kept.
///
/// A new stack has no cursors. Call [`Stack::init`] (or
/// [`Stack::init_full`]) before using it; until then every mutating call
/// fails with [`Error::Uninitialized`].
///
/// The value of `N` must fit in an [`Addr`], which is checked with an
/// assert.
pub struct Stack<const N: usize> {
    /// The memory reserved for the stack
    contents: [u8; N],
    /// Set by a successful `init`
    cursors: Option<StackCursors>,
}

impl<const N: usize> Stack<N> {
    /// The size of the backing array, as an address
    const SIZE: Addr = N as Addr;

    /// Create a new, uninitialised stack
    pub const fn new() -> Self {
        assert!(N <= Addr::MAX as usize);
        Self {
            contents: [0u8; N],
            cursors: None,
        }
    }

    /// Set the stack up to use the slots `bottom..top_sentinel`.
    ///
    /// Any previous contents are forgotten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `top_sentinel` is not strictly
    /// above `bottom`, or lies past the end of the backing array. The stack
    /// is left exactly as it was.
    pub fn init(&mut self, top_sentinel: Addr, bottom: Addr) -> Result<(), Error> {
        if !arith::gt(top_sentinel, bottom) || arith::gt(top_sentinel, Self::SIZE) {
            return Err(Error::InvalidRange);
        }
        self.cursors = Some(StackCursors {
            top_sentinel,
            bottom,
            top: top_sentinel,
        });
        Ok(())
    }

    /// Set the stack up to use the whole backing array
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `N` is zero.
    pub fn init_full(&mut self) -> Result<(), Error> {
        self.init(Self::SIZE, 0)
    }

    /// Push a byte onto the stack
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if every slot is in use, or
    /// [`Error::Uninitialized`]. Nothing is modified on failure.
    pub fn push(&mut self, value: u8) -> Result<(), Error> {
        let cursors = self.cursors.as_mut().ok_or(Error::Uninitialized)?;
        if cursors.top == cursors.bottom {
            return Err(Error::Overflow);
        }
        cursors.top -= 1;
        self.contents[usize::from(cursors.top)] = value;
        Ok(())
    }

    /// Pop the most recently pushed byte
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underflow`] if nothing has been pushed, or
    /// [`Error::Uninitialized`]. Nothing is modified on failure.
    pub fn pop(&mut self) -> Result<u8, Error> {
        let cursors = self.cursors.as_mut().ok_or(Error::Uninitialized)?;
        if cursors.top == cursors.top_sentinel {
            return Err(Error::Underflow);
        }
        let value = self.contents[usize::from(cursors.top)];
        cursors.top += 1;
        Ok(value)
    }

    /// Look at the most recently pushed byte without popping it
    ///
    /// # Errors
    ///
    /// As for [`Stack::pop`].
    pub fn peek(&self) -> Result<u8, Error> {
        let cursors = self.cursors.as_ref().ok_or(Error::Uninitialized)?;
        if cursors.top == cursors.top_sentinel {
            return Err(Error::Underflow);
        }
        Ok(self.contents[usize::from(cursors.top)])
    }

    /// Discard everything on the stack, keeping the bounds
    pub fn reset(&mut self) {
        if let Some(cursors) = self.cursors.as_mut() {
            cursors.top = cursors.top_sentinel;
        }
    }

    /// Get the address of the most recent push
    pub fn top(&self) -> Option<Addr> {
        self.cursors.map(|c| c.top)
    }

    /// Get the address of the lowest usable slot
    pub fn bottom(&self) -> Option<Addr> {
        self.cursors.map(|c| c.bottom)
    }

    /// Get the address one above the highest usable slot
    pub fn top_sentinel(&self) -> Option<Addr> {
        self.cursors.map(|c| c.top_sentinel)
    }

    /// Get a copy of all the cursors
    pub fn cursors(&self) -> Option<StackCursors> {
        self.cursors
    }

    /// How many bytes the stack can hold (zero if uninitialised)
    pub fn capacity(&self) -> usize {
        self.cursors.map_or(0, |c| usize::from(c.top_sentinel - c.bottom))
    }

    /// How many bytes are on the stack
    pub fn len(&self) -> usize {
        self.cursors.map_or(0, |c| usize::from(c.top_sentinel - c.top))
    }

    /// Is there nothing to pop?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Would the next push overflow?
    pub fn is_full(&self) -> bool {
        self.cursors.is_some_and(|c| c.top == c.bottom)
    }
}

impl<const N: usize> Default for Stack<N> {
    fn default() -> Self {
        Stack::new()
    }
}


// End of File
