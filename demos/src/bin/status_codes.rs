//! Drives both containers through the status-code calling convention,
//! including missing structures and output slots

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_std]
#![no_main]

use basino::{Addr, Error, Queue, Stack, raw};
use basino_demos::Report;

static mut STACK: Stack<32> = Stack::new();
static mut QUEUE: Queue<32> = Queue::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    let mut report = Report::new("status codes");
    // SAFETY: main is the only code that touches these, and it runs once
    let stack = unsafe { &mut *(&raw mut STACK) };
    let queue = unsafe { &mut *(&raw mut QUEUE) };
    let null = Error::NullPointer.code();
    let mut value = 0u8;
    let mut addr: Addr = 0;

    report.expect(raw::stack_init::<32>(None, 32, 0), null, "null stack init");
    report.expect(raw::stack_push::<32>(None, 1), null, "null stack push");
    report.expect(raw::stack_pop::<32>(None, Some(&mut value)), null, "null stack pop");

    report.expect(raw::stack_init(Some(&mut *stack), 32, 0), raw::OK, "stack init");
    report.expect(raw::stack_get_size(Some(&*stack), Some(&mut addr)), raw::OK, "stack size");
    report.expect(addr, 32, "stack size should be 32");
    report.expect(raw::stack_push(Some(&mut *stack), 5), raw::OK, "stack push");
    report.expect(raw::stack_pop(Some(&mut *stack), None), null, "pop without a slot");
    report.expect(raw::stack_pop(Some(&mut *stack), Some(&mut value)), raw::OK, "stack pop");
    report.expect(value, 5, "popped value should be 5");
    report.expect(
        raw::stack_pop(Some(&mut *stack), Some(&mut value)),
        Error::Underflow.code(),
        "empty stack pop",
    );

    report.expect(raw::queue_init::<32>(None, 0, 32), null, "null queue init");
    report.expect(raw::queue_put::<32>(None, 1), null, "null queue put");
    report.expect(raw::queue_init(Some(&mut *queue), 0, 32), raw::OK, "queue init");
    report.expect(raw::queue_put(Some(&mut *queue), 7), raw::OK, "queue put");
    report.expect(raw::queue_get(Some(&mut *queue), Some(&mut value)), raw::OK, "queue get");
    report.expect(value, 7, "got value should be 7");
    report.expect(
        raw::queue_get(Some(&mut *queue), Some(&mut value)),
        Error::Empty.code(),
        "empty queue get",
    );
    report.expect(raw::queue_get_last_head(Some(&*queue), Some(&mut addr)), raw::OK, "last head");
    report.expect(addr, 0, "last head should be the slot just read");

    report.finish()
}

// End of File
