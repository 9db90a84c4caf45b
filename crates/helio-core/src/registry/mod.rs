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

//! Typed registry façades over the pool layer.
//!
//! Each math type gets a registry presenting the pool contract in that
//! type's vocabulary: `create`/`release`/`is_valid`/`try_get`/`set` plus
//! per-component accessors (`x(id)`, `const_x(id)`, ...). A registry owns
//! exactly **one** pool holding the whole aggregate — there is no x-pool
//! and y-pool to keep in lockstep, so the desynchronization failure mode of
//! split component storage cannot arise; the handle is the single identity
//! of the object everywhere.
//!
//! Matrix registries are the exception in storage shape only: their cells
//! live in a [`SequentialBlock`](crate::pool::SequentialBlock) so a single
//! cell can be read or written without materializing the whole matrix.
//!
//! Nothing here is global. All registries live inside a [`Registry`]
//! context value that callers construct and pass where needed, which keeps
//! tests isolated and allows several independent instances (one per frame
//! arena, say).

/// Generates a registry façade for a vector-like value type: a wrapper
/// around one `MemoryBlock` of the aggregate plus named component
/// accessors.
///
/// Mechanical by design — every façade body is identical except for the
/// component list, and this keeps them provably so.
macro_rules! vector_registry {
    (
        $(#[$meta:meta])*
        $registry:ident, $values:ident, $handle_alias:ident, $scalar:ty,
        $(($field:ident, $const_fn:ident)),+
    ) => {
        #[doc = concat!("Handle to a pooled [`", stringify!($values), "`].")]
        pub type $handle_alias = crate::pool::Handle<$values>;

        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $registry {
            pool: crate::pool::MemoryBlock<$values>,
        }

        impl $registry {
            /// Creates an empty registry with the default pool sizing.
            pub fn new() -> Self {
                Self {
                    pool: crate::pool::MemoryBlock::new(),
                }
            }

            /// Creates an empty registry with explicit pool sizing.
            pub fn with_config(config: crate::pool::PoolConfig) -> Self {
                Self {
                    pool: crate::pool::MemoryBlock::with_config(config),
                }
            }

            /// Registers a new value from raw components, recycling freed
            /// slots.
            pub fn create(&mut self, $($field: $scalar),+) -> $handle_alias {
                self.push($values::new($($field),+), true)
            }

            #[doc = concat!(
                "Registers a new value from a [`", stringify!($values),
                "`] aggregate, recycling freed slots."
            )]
            pub fn create_from(&mut self, values: $values) -> $handle_alias {
                self.push(values, true)
            }

            /// Registers a new value with explicit control over slot reuse.
            ///
            /// Pass `reuse_free_slots = false` to force a monotonically
            /// increasing handle even when freed slots exist.
            pub fn push(&mut self, values: $values, reuse_free_slots: bool) -> $handle_alias {
                self.pool.push(values, reuse_free_slots)
            }

            /// Releases the value behind `handle`. Returns `false` if the
            /// handle was not live (releasing twice is safe and reports
            /// failure).
            pub fn release(&mut self, handle: $handle_alias) -> bool {
                self.pool.remove(handle)
            }

            /// Whether `handle` currently names a live value.
            #[inline]
            pub fn is_valid(&self, handle: $handle_alias) -> bool {
                self.pool.is_valid(handle)
            }

            /// Copies the value out of the registry, if live.
            pub fn try_get(&self, handle: $handle_alias) -> Option<$values> {
                self.pool.try_get(handle)
            }

            /// Overwrites the value behind `handle`. Returns `false` if the
            /// handle is invalid.
            pub fn set(&mut self, handle: $handle_alias, values: $values) -> bool {
                self.pool.set(handle, values)
            }

            $(
                #[doc = concat!(
                    "Mutable access to the `", stringify!($field),
                    "` component.\n\n# Panics\nPanics if the handle is invalid."
                )]
                #[inline]
                pub fn $field(&mut self, handle: $handle_alias) -> &mut $scalar {
                    &mut self.pool.get_mut(handle).$field
                }

                #[doc = concat!(
                    "Reads the `", stringify!($field),
                    "` component.\n\n# Panics\nPanics if the handle is invalid."
                )]
                #[inline]
                pub fn $const_fn(&self, handle: $handle_alias) -> $scalar {
                    self.pool.get(handle).$field
                }
            )+

            /// Number of slots ever allocated, free ones included.
            #[inline]
            pub fn len(&self) -> usize {
                self.pool.len()
            }

            /// Whether the registry has never allocated a slot.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.pool.is_empty()
            }

            /// Number of live values.
            #[inline]
            pub fn live_len(&self) -> usize {
                self.pool.live_len()
            }
        }
    };
}

/// Generates a registry façade for a square matrix type backed by a
/// `SequentialBlock` of its cells (`K = dim * dim`, column-major).
macro_rules! matrix_registry {
    (
        $(#[$meta:meta])*
        $registry:ident, $values:ident, $handle_alias:ident, $dim:literal, $cells:literal
    ) => {
        #[doc = concat!("Handle to a pooled [`", stringify!($values), "`].")]
        pub type $handle_alias = crate::pool::Handle<[f32; $cells]>;

        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $registry {
            pool: crate::pool::SequentialBlock<f32, $cells>,
        }

        impl $registry {
            /// Creates an empty registry with the default pool sizing.
            pub fn new() -> Self {
                Self {
                    pool: crate::pool::SequentialBlock::new(),
                }
            }

            /// Creates an empty registry with explicit pool sizing.
            pub fn with_config(config: crate::pool::PoolConfig) -> Self {
                Self {
                    pool: crate::pool::SequentialBlock::with_config(config),
                }
            }

            /// Registers a new matrix, recycling freed slots.
            pub fn create(&mut self, values: $values) -> $handle_alias {
                self.push(values, true)
            }

            /// Registers a new matrix with explicit control over slot reuse.
            pub fn push(&mut self, values: $values, reuse_free_slots: bool) -> $handle_alias {
                self.pool.push(values.to_cols_array(), reuse_free_slots)
            }

            /// Releases the matrix behind `handle`. Returns `false` if the
            /// handle was not live.
            pub fn release(&mut self, handle: $handle_alias) -> bool {
                self.pool.try_remove(handle)
            }

            /// Whether `handle` currently names a live matrix.
            #[inline]
            pub fn is_valid(&self, handle: $handle_alias) -> bool {
                self.pool.is_valid(handle)
            }

            /// Copies the matrix out of the registry, if live.
            pub fn try_get(&self, handle: $handle_alias) -> Option<$values> {
                self.pool.try_get_group(handle).map($values::from_cols_array)
            }

            /// Overwrites the matrix behind `handle`. Returns `false` if the
            /// handle is invalid.
            pub fn set(&mut self, handle: $handle_alias, values: $values) -> bool {
                self.pool.set_group(handle, values.to_cols_array())
            }

            /// Mutable access to one cell, without materializing the matrix.
            ///
            /// # Panics
            /// Panics if the handle is invalid or `col`/`row` are out of
            /// range.
            #[inline]
            pub fn cell(&mut self, handle: $handle_alias, col: usize, row: usize) -> &mut f32 {
                assert!(col < $dim && row < $dim, "cell ({col}, {row}) out of range");
                self.pool.get_mut(handle, col * $dim + row)
            }

            /// Reads one cell, without materializing the matrix.
            ///
            /// # Panics
            /// Panics if the handle is invalid or `col`/`row` are out of
            /// range.
            #[inline]
            pub fn const_cell(&self, handle: $handle_alias, col: usize, row: usize) -> f32 {
                assert!(col < $dim && row < $dim, "cell ({col}, {row}) out of range");
                *self.pool.get(handle, col * $dim + row)
            }

            /// Number of matrix slots ever allocated, free ones included.
            #[inline]
            pub fn len(&self) -> usize {
                self.pool.len()
            }

            /// Whether the registry has never allocated a slot.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.pool.is_empty()
            }

            /// Number of live matrices.
            #[inline]
            pub fn live_len(&self) -> usize {
                self.pool.live_len()
            }
        }
    };
}

mod context;
mod matrix;
mod quaternion;
mod vector;

pub use context::Registry;
pub use matrix::{Mat2Handle, Mat2Registry, Mat4Handle, Mat4Registry};
pub use quaternion::{QuaternionHandle, QuaternionRegistry};
pub use vector::{
    IVec2Handle, IVec2Registry, IVec3Handle, IVec3Registry, IVec4Handle, IVec4Registry,
    Vec2Handle, Vec2Registry, Vec3Handle, Vec3Registry, Vec4Handle, Vec4Registry,
};
