//! Holds the [`Error`] type

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

/// Everything that can go wrong when calling into a [`Stack`](crate::Stack)
/// or a [`Queue`](crate::Queue).
///
/// Each variant has a stable, non-zero result code. Zero is reserved for
/// success, see [`crate::raw`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Error {
    /// The structure (or an output slot) was not supplied
    NullPointer = 1,
    /// The bounds given to `init` do not describe a usable region of the
    /// backing array
    InvalidRange = 2,
    /// Pushed into a full stack, or an address calculation carried
    Overflow = 3,
    /// Popped from an empty stack
    Underflow = 4,
    /// Put into a full queue
    Full = 5,
    /// Got from an empty queue
    Empty = 6,
    /// The structure has not been through a successful `init`
    Uninitialized = 7,
}

impl Error {
    /// Get the result code for this error
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Turn a result code back into an error.
    ///
    /// Returns `None` for `0` (success) and for codes we never produce.
    pub const fn from_code(code: u8) -> Option<Error> {
        match code {
            1 => Some(Error::NullPointer),
            2 => Some(Error::InvalidRange),
            3 => Some(Error::Overflow),
            4 => Some(Error::Underflow),
            5 => Some(Error::Full),
            6 => Some(Error::Empty),
            7 => Some(Error::Uninitialized),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Error::NullPointer => "a required reference was null",
            Error::InvalidRange => "bounds do not describe a usable buffer",
            Error::Overflow => "overflow",
            Error::Underflow => "underflow",
            Error::Full => "queue is full",
            Error::Empty => "queue is empty",
            Error::Uninitialized => "structure has not been initialised",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}


// End of File
