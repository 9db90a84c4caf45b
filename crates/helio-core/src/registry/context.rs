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

//! The registry context object owning every pool-backed registry.

use super::matrix::{Mat2Registry, Mat4Registry};
use super::quaternion::QuaternionRegistry;
use super::vector::{
    IVec2Registry, IVec3Registry, IVec4Registry, Vec2Registry, Vec3Registry, Vec4Registry,
};
use crate::pool::PoolConfig;
use crate::resource::{MaterialRegistry, TextureRegistry};

/// The single context object owning all pool-backed registries.
///
/// There is deliberately no global instance: construct a `Registry`, own
/// it, and pass it (mutably) to whoever needs it. Tests get isolation for
/// free, and systems that want several independent stores (per frame, per
/// level) just build more of them.
///
/// The registry is `Send` but not shareable: all mutation takes
/// `&mut self` on the individual registries and there is no internal
/// locking. Confine it to one owning thread; concurrent access is the
/// caller's problem to arrange, explicitly, with a lock of their own.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Pooled [`Vec2`](crate::math::Vec2) storage.
    pub vec2: Vec2Registry,
    /// Pooled [`Vec3`](crate::math::Vec3) storage.
    pub vec3: Vec3Registry,
    /// Pooled [`Vec4`](crate::math::Vec4) storage.
    pub vec4: Vec4Registry,
    /// Pooled [`IVec2`](crate::math::IVec2) storage.
    pub ivec2: IVec2Registry,
    /// Pooled [`IVec3`](crate::math::IVec3) storage.
    pub ivec3: IVec3Registry,
    /// Pooled [`IVec4`](crate::math::IVec4) storage.
    pub ivec4: IVec4Registry,
    /// Pooled [`Quaternion`](crate::math::Quaternion) storage.
    pub quaternion: QuaternionRegistry,
    /// Pooled [`Mat2`](crate::math::Mat2) storage.
    pub mat2: Mat2Registry,
    /// Pooled [`Mat4`](crate::math::Mat4) storage.
    pub mat4: Mat4Registry,
    /// Pooled texture storage.
    pub textures: TextureRegistry,
    /// Pooled material storage.
    pub materials: MaterialRegistry,
}

impl Registry {
    /// Creates a registry with default pool sizing everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry applying the same [`PoolConfig`] to every pool.
    pub fn with_config(config: PoolConfig) -> Self {
        log::debug!(
            "registry created (initial_capacity {}, expansion_scalar {})",
            config.initial_capacity,
            config.expansion_scalar
        );
        Self {
            vec2: Vec2Registry::with_config(config),
            vec3: Vec3Registry::with_config(config),
            vec4: Vec4Registry::with_config(config),
            ivec2: IVec2Registry::with_config(config),
            ivec3: IVec3Registry::with_config(config),
            ivec4: IVec4Registry::with_config(config),
            quaternion: QuaternionRegistry::with_config(config),
            mat2: Mat2Registry::with_config(config),
            mat4: Mat4Registry::with_config(config),
            textures: TextureRegistry::with_config(config),
            materials: MaterialRegistry::with_config(config),
        }
    }
}
