//! The on-target byte layout of the cursor blocks
//!
//! Code on the other side of an assembly or debugger boundary sees a stack
//! as three little-endian 16-bit words, and a queue as five:
//!
//! | Structure | Words                                    |
//! |-----------|------------------------------------------|
//! | Stack     | `top_sentinel`, `bottom`, `top`          |
//! | Queue     | `start`, `queue_end`, `head`, `last_head`, `tail` |
//!
//! The cursor structs are `#[repr(C)]` with exactly these fields, so the
//! offsets below are also their in-memory offsets.

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{Addr, QueueCursors, StackCursors};

impl StackCursors {
    /// The offset, in bytes, to the `top_sentinel` field
    pub const TOP_SENTINEL_OFFSET: usize = core::mem::offset_of!(StackCursors, top_sentinel);

    /// The offset, in bytes, to the `bottom` field
    pub const BOTTOM_OFFSET: usize = core::mem::offset_of!(StackCursors, bottom);

    /// The offset, in bytes, to the `top` field
    pub const TOP_OFFSET: usize = core::mem::offset_of!(StackCursors, top);

    /// The size of the encoded block
    pub const ENCODED_LEN: usize = 6;

    /// Encode as little-endian words
    pub fn to_le_bytes(&self) -> [u8; StackCursors::ENCODED_LEN] {
        let mut out = [0u8; StackCursors::ENCODED_LEN];
        put_word(&mut out, Self::TOP_SENTINEL_OFFSET, self.top_sentinel);
        put_word(&mut out, Self::BOTTOM_OFFSET, self.bottom);
        put_word(&mut out, Self::TOP_OFFSET, self.top);
        out
    }

    /// Decode from little-endian words
    pub fn from_le_bytes(bytes: [u8; StackCursors::ENCODED_LEN]) -> StackCursors {
        StackCursors {
            top_sentinel: get_word(&bytes, Self::TOP_SENTINEL_OFFSET),
            bottom: get_word(&bytes, Self::BOTTOM_OFFSET),
            top: get_word(&bytes, Self::TOP_OFFSET),
        }
    }
}

impl QueueCursors {
    /// The offset, in bytes, to the `start` field
    pub const START_OFFSET: usize = core::mem::offset_of!(QueueCursors, start);

    /// The offset, in bytes, to the `queue_end` field
    pub const QUEUE_END_OFFSET: usize = core::mem::offset_of!(QueueCursors, queue_end);

    /// The offset, in bytes, to the `head` field
    pub const HEAD_OFFSET: usize = core::mem::offset_of!(QueueCursors, head);

    /// The offset, in bytes, to the `last_head` field
    pub const LAST_HEAD_OFFSET: usize = core::mem::offset_of!(QueueCursors, last_head);

    /// The offset, in bytes, to the `tail` field
    pub const TAIL_OFFSET: usize = core::mem::offset_of!(QueueCursors, tail);

    /// The size of the encoded block
    pub const ENCODED_LEN: usize = 10;

    /// Encode as little-endian words
    pub fn to_le_bytes(&self) -> [u8; QueueCursors::ENCODED_LEN] {
        let mut out = [0u8; QueueCursors::ENCODED_LEN];
        put_word(&mut out, Self::START_OFFSET, self.start);
        put_word(&mut out, Self::QUEUE_END_OFFSET, self.queue_end);
        put_word(&mut out, Self::HEAD_OFFSET, self.head);
        put_word(&mut out, Self::LAST_HEAD_OFFSET, self.last_head);
        put_word(&mut out, Self::TAIL_OFFSET, self.tail);
        out
    }

    /// Decode from little-endian words
    pub fn from_le_bytes(bytes: [u8; QueueCursors::ENCODED_LEN]) -> QueueCursors {
        QueueCursors {
            start: get_word(&bytes, Self::START_OFFSET),
            queue_end: get_word(&bytes, Self::QUEUE_END_OFFSET),
            head: get_word(&bytes, Self::HEAD_OFFSET),
            last_head: get_word(&bytes, Self::LAST_HEAD_OFFSET),
            tail: get_word(&bytes, Self::TAIL_OFFSET),
        }
    }
}

fn put_word(out: &mut [u8], offset: usize, value: Addr) {
    out[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn get_word(bytes: &[u8], offset: usize) -> Addr {
    Addr::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

// The encoded blocks must be the in-memory structs, byte for byte
const _: () = assert!(core::mem::size_of::<StackCursors>() == StackCursors::ENCODED_LEN);
const _: () = assert!(core::mem::size_of::<QueueCursors>() == QueueCursors::ENCODED_LEN);


// End of File
