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

//! Handle-based object pools.
//!
//! This module is the storage engine under every registry façade in the
//! crate. A pool owns a dense, growable array of values plus an ordered set
//! of freed slot indices, and hands out stable [`Handle`]s for the values it
//! stores. Freed slots are recycled lowest-index-first, so allocation order
//! is fully deterministic and cheap to test against.
//!
//! Two shapes are provided:
//!
//! - [`MemoryBlock<T>`] — one value per handle.
//! - [`SequentialBlock<T, K>`] — K contiguous values per handle, stored in a
//!   single flat array (used for aggregates like matrix cells, where
//!   per-cell access without building an intermediate struct matters).
//!
//! Error handling follows a two-tier split. Queries and releases on stale
//! handles are recoverable and return `bool`/`Option`; direct accessors
//! (`get`, `get_mut`) treat an invalid handle as a violated precondition and
//! panic, in the spirit of slice indexing.
//!
//! Pools are single-threaded by construction: every mutation takes
//! `&mut self` and there is no internal locking. Confine a pool (or the
//! [`Registry`](crate::registry::Registry) that owns it) to one thread, or
//! wrap it in a lock of your choosing.

mod handle;
mod memory_block;
mod sequential_block;

pub use handle::Handle;
pub use memory_block::MemoryBlock;
pub use sequential_block::SequentialBlock;

use serde::{Deserialize, Serialize};

/// Sizing parameters shared by [`MemoryBlock`] and [`SequentialBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Number of slots (or slot groups) to reserve up front.
    pub initial_capacity: usize,
    /// Fraction of the current capacity to add when the backing array is
    /// exhausted. The computed growth is rounded to the nearest slot and
    /// clamped to at least one, so a scalar of `0.0` degrades to
    /// grow-by-one instead of stalling.
    pub expansion_scalar: f32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 8,
            expansion_scalar: 0.5,
        }
    }
}

impl PoolConfig {
    /// Number of additional slots to reserve for a backing array that
    /// currently holds `capacity` slots.
    pub(crate) fn growth_for(&self, capacity: usize) -> usize {
        if self.expansion_scalar <= 0.0 {
            log::warn!(
                "pool expansion_scalar {} is non-positive; growing by one slot",
                self.expansion_scalar
            );
            return 1;
        }
        ((capacity as f32 * self.expansion_scalar) + 0.5).floor().max(1.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_rounds_to_nearest_and_never_stalls() {
        let config = PoolConfig {
            initial_capacity: 0,
            expansion_scalar: 0.5,
        };
        assert_eq!(config.growth_for(0), 1);
        assert_eq!(config.growth_for(1), 1);
        assert_eq!(config.growth_for(3), 2); // 1.5 rounds up
        assert_eq!(config.growth_for(8), 4);
    }

    #[test]
    fn zero_scalar_degrades_to_grow_by_one() {
        let config = PoolConfig {
            initial_capacity: 0,
            expansion_scalar: 0.0,
        };
        assert_eq!(config.growth_for(64), 1);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = PoolConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PoolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
