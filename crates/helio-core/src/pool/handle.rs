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

//! Defines the strongly typed slot handle shared by all pool types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// An opaque, strongly typed identifier for a slot in a pool.
///
/// A handle is nothing more than a slot index tagged with the stored type
/// `T`, so a `Handle<TextureProperties>` cannot be passed where a
/// `Handle<Vec2>` is expected. The tag is purely compile-time; a handle is
/// four bytes and `Copy`.
///
/// A handle has no intrinsic validity. Whether it currently names a live
/// slot is a property of the `(handle, pool)` pair at a point in time and
/// is answered by the pool's `is_valid` query. After the slot is released,
/// the same index may be handed out again by a later allocation; callers
/// that cache handles across releases get "last writer wins" semantics,
/// exactly like a recycled array index.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Handle<T> {
    index: u32,
    #[serde(skip)]
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    /// Creates a handle from a raw slot index.
    ///
    /// This is the only way to conjure a handle out of an integer and is
    /// intended for pools and serialization code, not for general use.
    #[inline]
    pub const fn from_index(index: u32) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Returns the raw slot index behind this handle.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }
}

// PhantomData<fn() -> T> keeps these impls free of `T: ...` bounds, which a
// derive would add.

impl<T> Clone for Handle<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Handle<T> {}

impl<T> PartialOrd for Handle<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Handle<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = std::any::type_name::<T>().rsplit("::").next().unwrap_or("?");
        write!(f, "Handle<{}>({})", tag, self.index)
    }
}
