//! Status-code calling convention
//!
//! These functions mirror the way the containers are driven from assembly
//! or C-like code: the structure is passed by a reference that may be
//! missing, results come back through an output slot that may also be
//! missing, and every call returns a small integer. [`OK`] is success;
//! anything else is an [`Error::code`].
//!
//! `Option<&mut T>` has the same representation as a nullable pointer, so a
//! `None` here is exactly a null pointer on the other side. Nothing is
//! modified when a call reports an error.

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{Addr, Error, Queue, Stack};

/// The status code for success
pub const OK: u8 = 0;

/// Convert a typed result into a status code
pub fn status<T>(result: Result<T, Error>) -> u8 {
    match result {
        Ok(_) => OK,
        Err(e) => e.code(),
    }
}

/// Convert a status code back into a typed result.
///
/// Returns `None` for codes we never produce.
pub fn check(code: u8) -> Option<Result<(), Error>> {
    if code == OK {
        Some(Ok(()))
    } else {
        Error::from_code(code).map(Err)
    }
}

/// Store `value` in `out`, or report a missing output slot
fn store<T>(out: Option<&mut T>, value: T) -> u8 {
    match out {
        Some(slot) => {
            *slot = value;
            OK
        }
        None => Error::NullPointer.code(),
    }
}

/// Initialise a stack over `bottom..top_sentinel`
pub fn stack_init<const N: usize>(
    stack: Option<&mut Stack<N>>,
    top_sentinel: Addr,
    bottom: Addr,
) -> u8 {
    let Some(stack) = stack else {
        return Error::NullPointer.code();
    };
    status(stack.init(top_sentinel, bottom))
}

/// Push `value` onto a stack
pub fn stack_push<const N: usize>(stack: Option<&mut Stack<N>>, value: u8) -> u8 {
    let Some(stack) = stack else {
        return Error::NullPointer.code();
    };
    status(stack.push(value))
}

/// Pop from a stack into `out`.
///
/// The output slot is checked before the stack is touched, so a missing
/// slot never loses a value.
pub fn stack_pop<const N: usize>(stack: Option<&mut Stack<N>>, out: Option<&mut u8>) -> u8 {
    let (Some(stack), Some(out)) = (stack, out) else {
        return Error::NullPointer.code();
    };
    match stack.pop() {
        Ok(value) => {
            *out = value;
            OK
        }
        Err(e) => e.code(),
    }
}

/// Read one cursor of a stack into `out`
fn stack_cursor<const N: usize>(
    stack: Option<&Stack<N>>,
    out: Option<&mut Addr>,
    f: fn(&Stack<N>) -> Option<Addr>,
) -> u8 {
    let Some(stack) = stack else {
        return Error::NullPointer.code();
    };
    match f(stack) {
        Some(addr) => store(out, addr),
        None => Error::Uninitialized.code(),
    }
}

/// Read the `top` cursor of a stack
pub fn stack_get_top<const N: usize>(stack: Option<&Stack<N>>, out: Option<&mut Addr>) -> u8 {
    stack_cursor(stack, out, Stack::top)
}

/// Read the `bottom` cursor of a stack
pub fn stack_get_bottom<const N: usize>(stack: Option<&Stack<N>>, out: Option<&mut Addr>) -> u8 {
    stack_cursor(stack, out, Stack::bottom)
}

/// Read the `top_sentinel` cursor of a stack
pub fn stack_get_top_sentinel<const N: usize>(
    stack: Option<&Stack<N>>,
    out: Option<&mut Addr>,
) -> u8 {
    stack_cursor(stack, out, Stack::top_sentinel)
}

/// Read the capacity of a stack, in bytes
pub fn stack_get_size<const N: usize>(stack: Option<&Stack<N>>, out: Option<&mut Addr>) -> u8 {
    let Some(stack) = stack else {
        return Error::NullPointer.code();
    };
    match stack.cursors() {
        Some(c) => store(out, c.top_sentinel - c.bottom),
        None => Error::Uninitialized.code(),
    }
}

/// Initialise a queue as a ring over `start..end`
pub fn queue_init<const N: usize>(queue: Option<&mut Queue<N>>, start: Addr, end: Addr) -> u8 {
    let Some(queue) = queue else {
        return Error::NullPointer.code();
    };
    status(queue.init(start, end))
}

/// Put `value` into a queue
pub fn queue_put<const N: usize>(queue: Option<&mut Queue<N>>, value: u8) -> u8 {
    let Some(queue) = queue else {
        return Error::NullPointer.code();
    };
    status(queue.put(value))
}

/// Get from a queue into `out`.
///
/// As with [`stack_pop`], a missing output slot is reported before the
/// queue is touched.
pub fn queue_get<const N: usize>(queue: Option<&mut Queue<N>>, out: Option<&mut u8>) -> u8 {
    let (Some(queue), Some(out)) = (queue, out) else {
        return Error::NullPointer.code();
    };
    match queue.get() {
        Ok(value) => {
            *out = value;
            OK
        }
        Err(e) => e.code(),
    }
}

/// Read one cursor of a queue into `out`
fn queue_cursor<const N: usize>(
    queue: Option<&Queue<N>>,
    out: Option<&mut Addr>,
    f: fn(&Queue<N>) -> Option<Addr>,
) -> u8 {
    let Some(queue) = queue else {
        return Error::NullPointer.code();
    };
    match f(queue) {
        Some(addr) => store(out, addr),
        None => Error::Uninitialized.code(),
    }
}

/// Read the `start` cursor of a queue
pub fn queue_get_start<const N: usize>(queue: Option<&Queue<N>>, out: Option<&mut Addr>) -> u8 {
    queue_cursor(queue, out, Queue::start)
}

/// Read the `queue_end` cursor of a queue
pub fn queue_get_end<const N: usize>(queue: Option<&Queue<N>>, out: Option<&mut Addr>) -> u8 {
    queue_cursor(queue, out, Queue::queue_end)
}

/// Read the `head` cursor of a queue
pub fn queue_get_head<const N: usize>(queue: Option<&Queue<N>>, out: Option<&mut Addr>) -> u8 {
    queue_cursor(queue, out, Queue::head)
}

/// Read the `last_head` cursor of a queue
pub fn queue_get_last_head<const N: usize>(
    queue: Option<&Queue<N>>,
    out: Option<&mut Addr>,
) -> u8 {
    queue_cursor(queue, out, Queue::last_head)
}

/// Read the `tail` cursor of a queue
pub fn queue_get_tail<const N: usize>(queue: Option<&Queue<N>>, out: Option<&mut Addr>) -> u8 {
    queue_cursor(queue, out, Queue::tail)
}


// End of File
