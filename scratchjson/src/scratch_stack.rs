// SPDX-License-Identifier: Apache-2.0

use alloc::vec::{Drain, Vec};
use core::marker::PhantomData;

use crate::{DefaultConfig, ScratchConfig};

/// Transient staging stack for content of unknown final length.
///
/// Items are pushed one at a time while a production is in progress, then the
/// whole run is popped off and compacted into an exactly sized allocation.
///
/// Key properties:
/// - Capacity is tracked in bytes and grows by x1.5, starting from
///   [`ScratchConfig::INITIAL_CAPACITY`], whenever a push would reach it
/// - Growth reallocates, so staged items are preserved
/// - `top` only moves through [`push`](Self::push), [`pop`](Self::pop) and
///   [`rewind`](Self::rewind); rewinding drops the discarded items
pub struct ScratchStack<T, C: ScratchConfig = DefaultConfig> {
    /// Live items; `items.len()` is the stack top.
    items: Vec<T>,
    /// Logical capacity in bytes.
    size: usize,
    _config: PhantomData<C>,
}

impl<T, C: ScratchConfig> ScratchStack<T, C> {
    /// Creates an empty stack. Nothing is allocated until the first push.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            size: 0,
            _config: PhantomData,
        }
    }

    /// Number of live items.
    pub fn top(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current logical capacity in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.size
    }

    fn item_size() -> usize {
        core::mem::size_of::<T>().max(1)
    }

    /// Grows the logical capacity until `count` more items fit below it.
    fn reserve(&mut self, count: usize) {
        let required = self
            .items
            .len()
            .saturating_add(count)
            .saturating_mul(Self::item_size());
        if required < self.size {
            return;
        }
        if self.size == 0 {
            self.size = C::INITIAL_CAPACITY.max(2);
        }
        while required >= self.size {
            self.size += self.size >> 1;
        }
        let slots = self.size / Self::item_size();
        self.items.reserve_exact(slots - self.items.len());
        log::debug!(
            "scratch stack grew to {} bytes ({} slots of {} bytes)",
            self.size,
            slots,
            Self::item_size()
        );
    }

    /// Pushes one item at the top, growing the stack if needed.
    pub fn push(&mut self, item: T) {
        self.reserve(1);
        self.items.push(item);
    }

    /// Moves the top back by `count` and yields the vacated items in push order.
    ///
    /// # Panics
    /// If fewer than `count` items are live. Only parser logic pops, so this is
    /// a programming error rather than a data error.
    pub fn pop(&mut self, count: usize) -> Drain<'_, T> {
        assert!(
            self.items.len() >= count,
            "scratch stack underflow: pop({}) with top {}",
            count,
            self.items.len()
        );
        let start = self.items.len() - count;
        self.items.drain(start..)
    }

    /// Pops `count` items into a new allocation of exactly `count` slots.
    pub fn pop_compact(&mut self, count: usize) -> alloc::boxed::Box<[T]> {
        let mut compacted = Vec::with_capacity(count);
        compacted.extend(self.pop(count));
        compacted.into_boxed_slice()
    }

    /// Drops every item above `mark`, restoring the top to `mark`.
    ///
    /// # Panics
    /// If `mark` is above the current top.
    pub fn rewind(&mut self, mark: usize) {
        assert!(
            mark <= self.items.len(),
            "scratch stack rewind to {} above top {}",
            mark,
            self.items.len()
        );
        self.items.truncate(mark);
    }
}

impl<T, C: ScratchConfig> Default for ScratchStack<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: ScratchConfig> core::fmt::Debug for ScratchStack<T, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScratchStack")
            .field("top", &self.items.len())
            .field("size", &self.size)
            .finish()
    }
}
