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

//! The K-values-per-handle pool.

use super::{Handle, PoolConfig};
use std::collections::BTreeSet;

/// A pool in which every handle owns exactly `K` contiguous slots of `T`.
///
/// Storage is one flat array indexed by `handle * K + offset`, rather than a
/// [`MemoryBlock`](super::MemoryBlock) of `[T; K]`. Flattening avoids
/// per-group padding and lets callers touch a single cell of an aggregate
/// (one matrix element, say) without constructing the whole group.
///
/// Handles are tagged with the group type `[T; K]`, so a `Mat2` cell pool
/// (`K = 4`) and a `Mat4` cell pool (`K = 16`) hand out mutually
/// incompatible handles. The group length is part of the pool's type; a
/// push cannot supply the wrong number of values.
///
/// Validity and reuse rules are identical to `MemoryBlock`: lowest freed
/// group index first, freed groups cleared to `T::default()`.
#[derive(Debug, Clone)]
pub struct SequentialBlock<T, const K: usize> {
    slots: Vec<T>,
    free: BTreeSet<u32>,
    config: PoolConfig,
}

impl<T: Default + Clone, const K: usize> SequentialBlock<T, K> {
    /// Creates an empty pool with the default [`PoolConfig`].
    ///
    /// # Panics
    /// Panics if `K` is zero; a zero-length group is a configuration bug.
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Creates an empty pool with explicit sizing parameters.
    ///
    /// # Panics
    /// Panics if `K` is zero.
    pub fn with_config(config: PoolConfig) -> Self {
        assert!(K > 0, "SequentialBlock requires a non-zero group length");
        Self {
            slots: Vec::with_capacity(config.initial_capacity * K),
            free: BTreeSet::new(),
            config,
        }
    }

    /// Stores a group of `K` values and returns a handle to it.
    ///
    /// Reuse semantics match [`MemoryBlock::push`](super::MemoryBlock::push):
    /// with `reuse_free_slots` the lowest freed group is recycled, otherwise
    /// the group is appended at `len()`.
    pub fn push(&mut self, values: [T; K], reuse_free_slots: bool) -> Handle<[T; K]> {
        if reuse_free_slots {
            if let Some(index) = self.free.pop_first() {
                let base = index as usize * K;
                for (offset, value) in values.into_iter().enumerate() {
                    self.slots[base + offset] = value;
                }
                log::trace!("sequential pool group {index} recycled");
                return Handle::from_index(index);
            }
        }

        if self.slots.len() == self.slots.capacity() {
            let additional = self.config.growth_for(self.slots.capacity() / K);
            self.slots.reserve_exact(additional * K);
            log::trace!("sequential pool grew by {additional} groups");
        }
        let index = (self.slots.len() / K) as u32;
        self.slots.extend(values);
        Handle::from_index(index)
    }

    /// Releases the group behind `handle`, clearing all `K` of its slots.
    ///
    /// Returns `false` if the handle is out of range or already free.
    pub fn try_remove(&mut self, handle: Handle<[T; K]>) -> bool {
        let index = handle.index();
        if index as usize >= self.len() || !self.free.insert(index) {
            return false;
        }
        let base = index as usize * K;
        for slot in &mut self.slots[base..base + K] {
            *slot = T::default();
        }
        true
    }

    /// Whether `handle` currently names a live group.
    #[inline]
    pub fn is_valid(&self, handle: Handle<[T; K]>) -> bool {
        (handle.index() as usize) < self.len() && !self.free.contains(&handle.index())
    }

    /// Copies one cell of a live group out of the pool.
    ///
    /// Returns `None` if the handle is invalid. An `offset >= K` is a
    /// programmer error and panics even on this recoverable path, matching
    /// slice indexing.
    pub fn try_get(&self, handle: Handle<[T; K]>, offset: usize) -> Option<T> {
        assert!(offset < K, "offset {offset} out of range for group of {K}");
        if self.is_valid(handle) {
            Some(self.slots[handle.index() as usize * K + offset].clone())
        } else {
            None
        }
    }

    /// Copies an entire live group out of the pool.
    pub fn try_get_group(&self, handle: Handle<[T; K]>) -> Option<[T; K]> {
        if !self.is_valid(handle) {
            return None;
        }
        let base = handle.index() as usize * K;
        Some(std::array::from_fn(|offset| self.slots[base + offset].clone()))
    }

    /// Returns a reference to one cell of the group behind `handle`.
    ///
    /// # Panics
    /// Panics if the handle is invalid or `offset >= K`.
    #[inline]
    pub fn get(&self, handle: Handle<[T; K]>, offset: usize) -> &T {
        assert!(offset < K, "offset {offset} out of range for group of {K}");
        assert!(self.is_valid(handle), "access through invalid {handle:?}");
        &self.slots[handle.index() as usize * K + offset]
    }

    /// Returns a mutable reference to one cell of the group behind `handle`.
    ///
    /// # Panics
    /// Panics if the handle is invalid or `offset >= K`.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle<[T; K]>, offset: usize) -> &mut T {
        assert!(offset < K, "offset {offset} out of range for group of {K}");
        assert!(self.is_valid(handle), "access through invalid {handle:?}");
        &mut self.slots[handle.index() as usize * K + offset]
    }

    /// Overwrites an entire group. Returns `false` if the handle is invalid.
    pub fn set_group(&mut self, handle: Handle<[T; K]>, values: [T; K]) -> bool {
        if !self.is_valid(handle) {
            return false;
        }
        let base = handle.index() as usize * K;
        for (offset, value) in values.into_iter().enumerate() {
            self.slots[base + offset] = value;
        }
        true
    }

    /// Number of groups ever allocated, including currently free ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len() / K
    }

    /// Whether the pool has never allocated a group.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of live groups.
    #[inline]
    pub fn live_len(&self) -> usize {
        self.len() - self.free.len()
    }

    /// Number of freed groups currently eligible for reuse.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}

impl<T: Default + Clone, const K: usize> Default for SequentialBlock<T, K> {
    fn default() -> Self {
        Self::new()
    }
}
