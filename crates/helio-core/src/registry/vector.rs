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

//! Registry façades for the vector value types.

use crate::math::{IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};

vector_registry!(
    /// Pooled storage for [`Vec2`] values.
    Vec2Registry, Vec2, Vec2Handle, f32,
    (x, const_x), (y, const_y)
);

vector_registry!(
    /// Pooled storage for [`Vec3`] values.
    Vec3Registry, Vec3, Vec3Handle, f32,
    (x, const_x), (y, const_y), (z, const_z)
);

vector_registry!(
    /// Pooled storage for [`Vec4`] values.
    Vec4Registry, Vec4, Vec4Handle, f32,
    (x, const_x), (y, const_y), (z, const_z), (w, const_w)
);

vector_registry!(
    /// Pooled storage for [`IVec2`] values.
    IVec2Registry, IVec2, IVec2Handle, i32,
    (x, const_x), (y, const_y)
);

vector_registry!(
    /// Pooled storage for [`IVec3`] values.
    IVec3Registry, IVec3, IVec3Handle, i32,
    (x, const_x), (y, const_y), (z, const_z)
);

vector_registry!(
    /// Pooled storage for [`IVec4`] values.
    IVec4Registry, IVec4, IVec4Handle, i32,
    (x, const_x), (y, const_y), (z, const_z), (w, const_w)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_read_back() {
        let mut registry = Vec2Registry::new();
        let h = registry.create(3.0, 4.0);
        assert!(registry.is_valid(h));
        assert_eq!(registry.try_get(h), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(registry.const_x(h), 3.0);
        assert_eq!(registry.const_y(h), 4.0);
    }

    #[test]
    fn component_accessors_mutate_in_place() {
        let mut registry = Vec3Registry::new();
        let h = registry.create_from(Vec3::ZERO);
        *registry.x(h) = 1.5;
        *registry.z(h) = -2.0;
        assert_eq!(registry.try_get(h), Some(Vec3::new(1.5, 0.0, -2.0)));
    }

    #[test]
    fn release_then_create_reuses_the_handle() {
        // The worked float2 scenario: the recycled handle must observe the
        // new value, never the old one.
        let mut registry = Vec2Registry::new();
        let h0 = registry.create(3.0, 4.0);
        assert_eq!(registry.try_get(h0), Some(Vec2::new(3.0, 4.0)));
        assert!(registry.release(h0));
        let h1 = registry.create(1.0, 1.0);
        assert_eq!(h1, h0);
        assert_eq!(registry.try_get(h0), Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn push_without_reuse_appends() {
        let mut registry = Vec4Registry::new();
        let h0 = registry.create(1.0, 2.0, 3.0, 4.0);
        registry.release(h0);
        let h1 = registry.push(Vec4::ONE, false);
        assert_eq!(h1.index(), 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.live_len(), 1);
    }

    #[test]
    fn release_is_idempotent_in_effect() {
        let mut registry = IVec3Registry::new();
        let h = registry.create(1, 2, 3);
        assert!(registry.release(h));
        assert!(!registry.release(h));
        assert_eq!(registry.try_get(h), None);
    }

    #[test]
    fn set_replaces_the_whole_aggregate() {
        let mut registry = IVec2Registry::new();
        let h = registry.create(1, 2);
        assert!(registry.set(h, IVec2::new(8, 9)));
        assert_eq!(registry.const_x(h), 8);
        registry.release(h);
        assert!(!registry.set(h, IVec2::ZERO));
    }

    #[test]
    #[should_panic(expected = "invalid")]
    fn component_access_on_released_handle_panics() {
        let mut registry = Vec2Registry::new();
        let h = registry.create(1.0, 2.0);
        registry.release(h);
        let _ = registry.const_x(h);
    }
}
