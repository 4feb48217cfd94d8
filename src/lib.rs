//! Fixed-capacity byte containers for a small interpreter runtime
//!
//! Provides a full-descending [`Stack`] and a wrap-around [`Queue`], both
//! backed by an array they own and addressed by 16-bit offsets into it.
//! Nothing here allocates, blocks or logs. Every call either succeeds or
//! returns an [`Error`] without having modified anything.
//!
//! The containers are not interrupt-safe. If an interrupt handler shares a
//! container with thread code, mask interrupts around each call.
//!
//! ```
//! let mut stack = basino::Stack::<32>::new();
//! stack.init(32, 0).unwrap();
//! stack.push(5).unwrap();
//! assert_eq!(stack.pop(), Ok(5));
//! assert_eq!(stack.pop(), Err(basino::Error::Underflow));
//!
//! let mut queue = basino::Queue::<32>::new();
//! queue.init(0, 32).unwrap();
//! queue.put(5).unwrap();
//! assert_eq!(queue.get(), Ok(5));
//! assert_eq!(queue.get(), Err(basino::Error::Empty));
//! ```

#![no_std]

pub mod arith;
mod error;
pub mod layout;
mod queue;
pub mod raw;
mod stack;

pub use error::Error;
pub use queue::{Queue, QueueCursors};
pub use stack::{Stack, StackCursors};

/// An address within a container's backing array
pub type Addr = u16;
