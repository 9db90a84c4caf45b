// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The single-value-per-handle pool.

use super::{Handle, PoolConfig};
use std::collections::BTreeSet;

/// A dense, growable pool of `T` addressed by stable [`Handle`]s.
///
/// Slots are recycled through an ordered free set: a release marks the index
/// free, and the next allocation with reuse enabled takes the *lowest* free
/// index. Handles are indices, not pointers, so growth of the backing array
/// never invalidates them.
///
/// # Invariants
///
/// - A slot index `i` is valid iff `i < len()` and `i` is not in the free
///   set.
/// - The free set holds no duplicates and no index `>= len()`.
/// - A freed slot is reset to `T::default()` immediately, so a stale read
///   through a recycled index observes a default value rather than old data.
#[derive(Debug, Clone)]
pub struct MemoryBlock<T> {
    slots: Vec<T>,
    free: BTreeSet<u32>,
    config: PoolConfig,
}

impl<T: Default + Clone> MemoryBlock<T> {
    /// Creates an empty pool with the default [`PoolConfig`].
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Creates an empty pool with explicit sizing parameters.
    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            free: BTreeSet::new(),
            config,
        }
    }

    /// Stores `value` and returns a handle to it.
    ///
    /// With `reuse_free_slots` set, the lowest freed index is recycled
    /// first; otherwise the value is always appended at `len()`, which
    /// callers use when external code has cached raw index values and must
    /// not see them handed out twice.
    pub fn push(&mut self, value: T, reuse_free_slots: bool) -> Handle<T> {
        if reuse_free_slots {
            if let Some(index) = self.free.pop_first() {
                self.slots[index as usize] = value;
                log::trace!("pool slot {index} recycled");
                return Handle::from_index(index);
            }
        }

        if self.slots.len() == self.slots.capacity() {
            let additional = self.config.growth_for(self.slots.capacity());
            self.slots.reserve_exact(additional);
            log::trace!("pool grew by {additional} slots");
        }
        let index = self.slots.len() as u32;
        self.slots.push(value);
        Handle::from_index(index)
    }

    /// Releases the slot behind `handle`, resetting it to `T::default()`.
    ///
    /// Returns `false` (and changes nothing) if the handle is out of range
    /// or already free, so a double release is detected rather than
    /// corrupting the free set.
    pub fn remove(&mut self, handle: Handle<T>) -> bool {
        let index = handle.index();
        if index as usize >= self.slots.len() || !self.free.insert(index) {
            return false;
        }
        self.slots[index as usize] = T::default();
        true
    }

    /// Whether `handle` currently names a live slot.
    #[inline]
    pub fn is_valid(&self, handle: Handle<T>) -> bool {
        (handle.index() as usize) < self.slots.len() && !self.free.contains(&handle.index())
    }

    /// Copies the value behind `handle` out of the pool, if it is live.
    pub fn try_get(&self, handle: Handle<T>) -> Option<T> {
        if self.is_valid(handle) {
            Some(self.slots[handle.index() as usize].clone())
        } else {
            None
        }
    }

    /// Returns a reference to the value behind `handle`.
    ///
    /// # Panics
    /// Panics if the handle is invalid. This accessor sits on hot paths
    /// where validity has already been established; use [`try_get`] or
    /// [`is_valid`] when it has not.
    ///
    /// [`try_get`]: Self::try_get
    /// [`is_valid`]: Self::is_valid
    #[inline]
    pub fn get(&self, handle: Handle<T>) -> &T {
        assert!(self.is_valid(handle), "access through invalid {handle:?}");
        &self.slots[handle.index() as usize]
    }

    /// Returns a mutable reference to the value behind `handle`.
    ///
    /// # Panics
    /// Panics if the handle is invalid, like [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, handle: Handle<T>) -> &mut T {
        assert!(self.is_valid(handle), "access through invalid {handle:?}");
        &mut self.slots[handle.index() as usize]
    }

    /// Overwrites the value behind `handle`. Returns `false` if the handle
    /// is invalid.
    pub fn set(&mut self, handle: Handle<T>, value: T) -> bool {
        if !self.is_valid(handle) {
            return false;
        }
        self.slots[handle.index() as usize] = value;
        true
    }

    /// Number of slots ever allocated, including currently free ones.
    ///
    /// This is *not* the number of live values; see [`live_len`](Self::live_len).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the pool has never allocated a slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of live (allocated and not freed) slots.
    #[inline]
    pub fn live_len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of freed slots currently eligible for reuse.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

impl<T: Default + Clone> Default for MemoryBlock<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle<T>(index: u32) -> Handle<T> {
        Handle::from_index(index)
    }

    #[test]
    fn data_round_trips() {
        let mut pool = MemoryBlock::new();
        let h = pool.push(17_i32, true);
        assert_eq!(pool.try_get(h), Some(17));
        assert_eq!(*pool.get(h), 17);
    }

    #[test]
    fn validity_round_trips() {
        let mut pool = MemoryBlock::new();
        let h = pool.push(1.0_f32, true);
        assert!(pool.is_valid(h));
        assert!(pool.remove(h));
        assert!(!pool.is_valid(h));
        assert_eq!(pool.try_get(h), None);
    }

    #[test]
    fn release_resets_the_slot() {
        let mut pool = MemoryBlock::new();
        let h = pool.push(99_i32, true);
        pool.remove(h);
        // The slot itself is defaulted even though the handle is dead.
        let again = pool.push(0, true);
        assert_eq!(again, h);
        assert_eq!(pool.try_get(again), Some(0));
    }

    #[test]
    fn reuse_takes_the_lowest_free_index() {
        let mut pool = MemoryBlock::new();
        let h0 = pool.push(10_i32, true);
        let h1 = pool.push(11, true);
        let h2 = pool.push(12, true);
        assert!(pool.remove(h2));
        assert!(pool.remove(h0));
        // Both 0 and 2 are free; 0 must come back first.
        assert_eq!(pool.push(20, true), h0);
        assert_eq!(pool.push(22, true), h2);
        assert_eq!(pool.try_get(h1), Some(11));
    }

    #[test]
    fn disabled_reuse_always_appends() {
        let mut pool = MemoryBlock::new();
        let h0 = pool.push(1_i32, true);
        pool.push(2, true);
        pool.remove(h0);
        let appended = pool.push(3, false);
        assert_eq!(appended.index() as usize, 2);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.free_count(), 1);
    }

    #[test]
    fn double_release_fails_and_leaves_free_set_intact() {
        let mut pool = MemoryBlock::new();
        let h = pool.push(5_i32, true);
        assert!(pool.remove(h));
        let free_before = pool.free_count();
        assert!(!pool.remove(h));
        assert_eq!(pool.free_count(), free_before);
    }

    #[test]
    fn release_out_of_range_fails() {
        let mut pool = MemoryBlock::<i32>::new();
        assert!(!pool.remove(handle(3)));
    }

    #[test]
    fn growth_preserves_existing_handles() {
        let mut pool = MemoryBlock::with_config(PoolConfig {
            initial_capacity: 2,
            expansion_scalar: 0.5,
        });
        let handles: Vec<_> = (0..64).map(|i| pool.push(i, true)).collect();
        for (i, h) in handles.iter().enumerate() {
            assert!(pool.is_valid(*h));
            assert_eq!(pool.try_get(*h), Some(i));
        }
    }

    #[test]
    fn live_len_tracks_releases() {
        let mut pool = MemoryBlock::new();
        let h0 = pool.push(1_u8, true);
        pool.push(2, true);
        assert_eq!(pool.live_len(), 2);
        pool.remove(h0);
        assert_eq!(pool.live_len(), 1);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    #[should_panic(expected = "invalid")]
    fn get_on_stale_handle_panics() {
        let mut pool = MemoryBlock::new();
        let h = pool.push(1_i32, true);
        pool.remove(h);
        let _ = pool.get(h);
    }

    #[test]
    fn set_only_writes_live_slots() {
        let mut pool = MemoryBlock::new();
        let h = pool.push(1_i32, true);
        assert!(pool.set(h, 2));
        assert_eq!(pool.try_get(h), Some(2));
        pool.remove(h);
        assert!(!pool.set(h, 3));
    }
}
