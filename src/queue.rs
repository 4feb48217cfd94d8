//! Holds the [`Queue`] type and methods
//!
//! The queue is a ring over a region of its backing array. `head` is the
//! next slot to read and `tail` the next slot to write, and both wrap back
//! to `start` after the last slot.
//!
//! Rather than keep a count, the queue remembers `last_head`, the slot it
//! most recently read from. That is always the slot just behind `head`, so
//! "is there room?" becomes a single compare of `tail` against `last_head`.
//! It also means one slot is always kept free: a region of `S` bytes holds
//! at most `S - 1` of them.

// Copyright (c) 2025 Ferrous Systems
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{Addr, Error, arith};

/// The cursors that describe where a [`Queue`] lives in its backing array.
///
/// Field order matches the on-target layout, see [`crate::layout`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(C)]
pub struct QueueCursors {
    /// The first slot in the ring
    pub start: Addr,
    /// One past the last slot in the ring
    pub queue_end: Addr,
    /// The next slot to read
    pub head: Addr,
    /// The slot most recently read (the one just behind `head`)
    pub last_head: Addr,
    /// The next slot to write
    pub tail: Addr,
}

impl QueueCursors {
    /// Step a cursor forward one slot, wrapping at the end of the ring
    const fn next(&self, cursor: Addr) -> Addr {
        if cursor == self.queue_end - 1 {
            self.start
        } else {
            cursor + 1
        }
    }

    /// The number of slots in the ring
    const fn size(&self) -> Addr {
        self.queue_end - self.start
    }
}

/// A first-in, first-out byte queue, with a backing array of `N` bytes.
///
/// A new queue has no cursors. Call [`Queue::init`] (or
/// [`Queue::init_full`]) before using it; until then every mutating call
/// fails with [`Error::Uninitialized`].
///
/// The value of `N` must fit in an [`Addr`], which is checked with an
/// assert.
pub struct Queue<const N: usize> {
    /// The memory reserved for the queue
    contents: [u8; N],
    /// Set by a successful `init`
    cursors: Option<QueueCursors>,
}

impl<const N: usize> Queue<N> {
    /// The size of the backing array, as an address
    const SIZE: Addr = N as Addr;

    /// Create a new, uninitialised queue
    pub const fn new() -> Self {
        assert!(N <= Addr::MAX as usize);
        Self {
            contents: [0u8; N],
            cursors: None,
        }
    }

    /// Set the queue up as a ring over the slots `start..end`.
    ///
    /// `head` and `tail` both start at `start`, and `last_head` starts on
    /// the final slot, so the first put lands on `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the region is empty or runs past
    /// the end of the backing array. The queue is left exactly as it was.
    pub fn init(&mut self, start: Addr, end: Addr) -> Result<(), Error> {
        if !arith::gt(end, start) || arith::gt(end, Self::SIZE) {
            return Err(Error::InvalidRange);
        }
        self.cursors = Some(QueueCursors {
            start,
            queue_end: end,
            head: start,
            last_head: end - 1,
            tail: start,
        });
        Ok(())
    }

    /// Set the queue up to use the whole backing array
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `N` is zero.
    pub fn init_full(&mut self) -> Result<(), Error> {
        self.init(0, Self::SIZE)
    }

    /// Put a byte on the end of the queue
    ///
    /// # Errors
    ///
    /// Returns [`Error::Full`] if there is no room, or
    /// [`Error::Uninitialized`]. Nothing is modified on failure.
    pub fn put(&mut self, value: u8) -> Result<(), Error> {
        let cursors = self.cursors.as_mut().ok_or(Error::Uninitialized)?;
        if cursors.last_head == cursors.tail {
            return Err(Error::Full);
        }
        self.contents[usize::from(cursors.tail)] = value;
        cursors.tail = cursors.next(cursors.tail);
        Ok(())
    }

    /// Take the oldest byte from the front of the queue
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if there is nothing to take, or
    /// [`Error::Uninitialized`]. Nothing is modified on failure.
    pub fn get(&mut self) -> Result<u8, Error> {
        let cursors = self.cursors.as_mut().ok_or(Error::Uninitialized)?;
        if cursors.head == cursors.tail {
            return Err(Error::Empty);
        }
        let value = self.contents[usize::from(cursors.head)];
        // Must track head exactly, or the full check drifts
        cursors.last_head = cursors.head;
        cursors.head = cursors.next(cursors.head);
        Ok(value)
    }

    /// Discard everything in the queue, keeping the bounds
    pub fn reset(&mut self) {
        if let Some(c) = self.cursors.as_mut() {
            c.head = c.start;
            c.tail = c.start;
            c.last_head = c.queue_end - 1;
        }
    }

    /// Get the address of the first slot in the ring
    pub fn start(&self) -> Option<Addr> {
        self.cursors.map(|c| c.start)
    }

    /// Get the address one past the last slot in the ring
    pub fn queue_end(&self) -> Option<Addr> {
        self.cursors.map(|c| c.queue_end)
    }

    /// Get the address of the next slot to read
    pub fn head(&self) -> Option<Addr> {
        self.cursors.map(|c| c.head)
    }

    /// Get the address of the slot most recently read
    pub fn last_head(&self) -> Option<Addr> {
        self.cursors.map(|c| c.last_head)
    }

    /// Get the address of the next slot to write
    pub fn tail(&self) -> Option<Addr> {
        self.cursors.map(|c| c.tail)
    }

    /// Get a copy of all the cursors
    pub fn cursors(&self) -> Option<QueueCursors> {
        self.cursors
    }

    /// How many bytes the queue can hold at once.
    ///
    /// This is one less than the size of the ring. Zero if uninitialised.
    pub fn capacity(&self) -> usize {
        self.cursors.map_or(0, |c| usize::from(c.size() - 1))
    }

    /// How many bytes are waiting to be read
    pub fn len(&self) -> usize {
        self.cursors.map_or(0, |c| {
            if arith::ge(c.tail, c.head) {
                usize::from(c.tail - c.head)
            } else {
                usize::from(c.size() - (c.head - c.tail))
            }
        })
    }

    /// Is there nothing to get?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Would the next put fail?
    pub fn is_full(&self) -> bool {
        self.cursors.is_some_and(|c| c.last_head == c.tail)
    }
}

impl<const N: usize> Default for Queue<N> {
    fn default() -> Self {
        Queue::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_then_full<const N: usize>() {
        let mut queue = Queue::<N>::new();
        queue.init_full().unwrap();
        assert_eq!(queue.get(), Err(Error::Empty));
        for i in 0..(N - 1) {
            assert_eq!(queue.put(i as u8), Ok(()), "put {i} of {N}");
        }
        assert!(queue.is_full());
        let before = queue.cursors();
        assert_eq!(queue.put(0xAA), Err(Error::Full));
        assert_eq!(queue.cursors(), before);
        for i in 0..(N - 1) {
            assert_eq!(queue.get(), Ok(i as u8));
        }
        assert_eq!(queue.get(), Err(Error::Empty));
    }

    /// Advance the ring by `offset` slots, then put and get `count` bytes
    fn fifo_across_wrap<const N: usize>(offset: usize, count: usize) {
        let mut queue = Queue::<N>::new();
        queue.init_full().unwrap();
        for _ in 0..offset {
            queue.put(0).unwrap();
            queue.get().unwrap();
        }
        for i in 0..count {
            queue.put((i + 100) as u8).unwrap();
        }
        assert_eq!(queue.len(), count);
        for i in 0..count {
            assert_eq!(queue.get(), Ok((i + 100) as u8));
        }
        assert_eq!(queue.get(), Err(Error::Empty));
    }

    #[test]
    fn full_after_size_minus_one_puts() {
        fill_then_full::<2>();
        fill_then_full::<3>();
        fill_then_full::<8>();
        fill_then_full::<32>();
        fill_then_full::<257>();
    }

    #[test]
    fn single_slot_ring_is_always_full() {
        let mut queue = Queue::<1>::new();
        queue.init_full().unwrap();
        assert_eq!(queue.capacity(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.put(1), Err(Error::Full));
        assert_eq!(queue.get(), Err(Error::Empty));
    }

    #[test]
    fn keeps_order_across_wraparound() {
        fifo_across_wrap::<4>(3, 3);
        fifo_across_wrap::<8>(5, 6);
        fifo_across_wrap::<32>(20, 31);
        fifo_across_wrap::<32>(31, 10);
    }

    #[test]
    fn init_sets_all_cursors() {
        let mut queue = Queue::<32>::new();
        assert_eq!(queue.cursors(), None);
        queue.init(0, 32).unwrap();
        assert_eq!(
            queue.cursors(),
            Some(QueueCursors {
                start: 0,
                queue_end: 32,
                head: 0,
                last_head: 31,
                tail: 0,
            })
        );
        assert_eq!(queue.capacity(), 31);
    }

    #[test]
    fn init_rejects_regions_outside_the_array() {
        let mut queue = Queue::<16>::new();
        assert_eq!(queue.init(4, 4), Err(Error::InvalidRange));
        assert_eq!(queue.init(8, 4), Err(Error::InvalidRange));
        assert_eq!(queue.init(0, 17), Err(Error::InvalidRange));
        assert_eq!(queue.cursors(), None);
    }

    #[test]
    fn zero_sized_queue_cannot_be_initialised() {
        let mut queue = Queue::<0>::new();
        assert_eq!(queue.init_full(), Err(Error::InvalidRange));
    }

    #[test]
    fn sub_range_wraps_to_its_own_start() {
        let mut queue = Queue::<16>::new();
        queue.init(4, 8).unwrap();
        for v in 1..=3 {
            queue.put(v).unwrap();
        }
        assert_eq!(queue.tail(), Some(7));
        assert_eq!(queue.get(), Ok(1));
        queue.put(4).unwrap();
        assert_eq!(queue.tail(), Some(4));
        assert_eq!(queue.put(5), Err(Error::Full));
        assert_eq!(&queue.contents[0..4], &[0, 0, 0, 0]);
        assert_eq!(&queue.contents[8..16], &[0; 8]);
        assert_eq!(queue.get(), Ok(2));
        assert_eq!(queue.get(), Ok(3));
        assert_eq!(queue.get(), Ok(4));
        assert_eq!(queue.head(), Some(4));
        assert_eq!(queue.last_head(), Some(7));
    }

    #[test]
    fn get_records_last_head_before_wrapping() {
        let mut queue = Queue::<4>::new();
        queue.init_full().unwrap();
        for v in 0..3 {
            queue.put(v).unwrap();
        }
        for _ in 0..3 {
            queue.get().unwrap();
        }
        // head is now on the last slot
        queue.put(9).unwrap();
        assert_eq!(queue.head(), Some(3));
        assert_eq!(queue.get(), Ok(9));
        assert_eq!(queue.last_head(), Some(3));
        assert_eq!(queue.head(), Some(0));
    }

    #[test]
    fn uninitialised_queue_refuses_work() {
        let mut queue = Queue::<8>::new();
        assert_eq!(queue.put(1), Err(Error::Uninitialized));
        assert_eq!(queue.get(), Err(Error::Uninitialized));
        assert_eq!(queue.head(), None);
        assert_eq!(queue.capacity(), 0);
        assert!(!queue.is_full());
    }

    #[test]
    fn failed_get_changes_nothing() {
        let mut queue = Queue::<4>::new();
        queue.init_full().unwrap();
        let before = queue.cursors();
        assert_eq!(queue.get(), Err(Error::Empty));
        assert_eq!(queue.cursors(), before);
    }

    #[test]
    fn reset_empties_but_keeps_bounds() {
        let mut queue = Queue::<8>::new();
        queue.init(2, 6).unwrap();
        queue.put(1).unwrap();
        queue.put(2).unwrap();
        queue.get().unwrap();
        queue.reset();
        assert!(queue.is_empty());
        assert_eq!(queue.head(), Some(2));
        assert_eq!(queue.tail(), Some(2));
        assert_eq!(queue.last_head(), Some(5));
        for v in 0..3 {
            queue.put(v).unwrap();
        }
        assert_eq!(queue.put(3), Err(Error::Full));
    }

    #[test]
    fn interleaved_put_get_never_loses_room() {
        let mut queue = Queue::<5>::new();
        queue.init_full().unwrap();
        for round in 0u8..50 {
            queue.put(round).unwrap();
            queue.put(round.wrapping_add(1)).unwrap();
            assert_eq!(queue.get(), Ok(round));
            assert_eq!(queue.get(), Ok(round.wrapping_add(1)));
            assert!(queue.is_empty());
            assert_eq!(queue.capacity() - queue.len(), 4);
        }
    }

    #[test]
    fn len_tracks_across_wrap() {
        let mut queue = Queue::<4>::new();
        queue.init_full().unwrap();
        queue.put(1).unwrap();
        queue.put(2).unwrap();
        queue.put(3).unwrap();
        queue.get().unwrap();
        queue.get().unwrap();
        queue.put(4).unwrap();
        assert_eq!(queue.tail(), Some(0));
        assert_eq!(queue.len(), 2);
        queue.put(5).unwrap();
        assert_eq!(queue.len(), 3);
        assert!(queue.is_full());
    }

    #[test]
    fn accessors_are_idempotent() {
        let mut queue = Queue::<8>::new();
        queue.init_full().unwrap();
        queue.put(3).unwrap();
        assert_eq!(queue.head(), queue.head());
        assert_eq!(queue.tail(), queue.tail());
        assert_eq!(queue.last_head(), queue.last_head());
        assert_eq!(queue.start(), queue.start());
        assert_eq!(queue.queue_end(), queue.queue_end());
    }
}

// End of File
