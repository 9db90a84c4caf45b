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

//! Material property storage behind pool handles.

use super::texture::TextureHandle;
use crate::math::LinearRgba;
use crate::pool::{Handle, MemoryBlock, PoolConfig};

/// Handle to a pooled [`MaterialProperties`].
pub type MaterialHandle = Handle<MaterialProperties>;

/// A metallic-roughness material description.
///
/// Texture references are [`TextureHandle`]s into the texture registry, not
/// pixel data; a material stays valid even while its textures are streamed
/// in or replaced. Whether a referenced handle is still live is a question
/// for the texture registry at use time.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProperties {
    /// The base color (albedo) of the material.
    pub base_color: LinearRgba,
    /// Self-illumination color; black means none.
    pub emissive: LinearRgba,
    /// Optional texture multiplied with `base_color`.
    pub base_color_texture: Option<TextureHandle>,
    /// Optional combined metallic (B) / roughness (G) texture.
    pub metallic_roughness_texture: Option<TextureHandle>,
    /// The metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metallic: f32,
    /// The roughness factor (0.0 = smooth, 1.0 = rough).
    pub roughness: f32,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self {
            base_color: LinearRgba::WHITE,
            emissive: LinearRgba::BLACK,
            base_color_texture: None,
            metallic_roughness_texture: None,
            metallic: 0.0,
            roughness: 0.5,
        }
    }
}

/// Pooled storage for [`MaterialProperties`].
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    pool: MemoryBlock<MaterialProperties>,
}

impl MaterialRegistry {
    /// Creates an empty registry with the default pool sizing.
    pub fn new() -> Self {
        Self {
            pool: MemoryBlock::new(),
        }
    }

    /// Creates an empty registry with explicit pool sizing.
    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            pool: MemoryBlock::with_config(config),
        }
    }

    /// Registers a material, recycling freed slots.
    pub fn create(&mut self, properties: MaterialProperties) -> MaterialHandle {
        self.push(properties, true)
    }

    /// Registers a material with explicit control over slot reuse.
    pub fn push(
        &mut self,
        properties: MaterialProperties,
        reuse_free_slots: bool,
    ) -> MaterialHandle {
        self.pool.push(properties, reuse_free_slots)
    }

    /// Releases the material behind `handle`. Returns `false` if the handle
    /// was not live.
    pub fn release(&mut self, handle: MaterialHandle) -> bool {
        self.pool.remove(handle)
    }

    /// Whether `handle` currently names a live material.
    #[inline]
    pub fn is_valid(&self, handle: MaterialHandle) -> bool {
        self.pool.is_valid(handle)
    }

    /// Copies the material properties out of the registry, if live.
    pub fn try_get(&self, handle: MaterialHandle) -> Option<MaterialProperties> {
        self.pool.try_get(handle)
    }

    /// Borrows the material properties behind `handle`.
    ///
    /// # Panics
    /// Panics if the handle is invalid.
    #[inline]
    pub fn properties(&self, handle: MaterialHandle) -> &MaterialProperties {
        self.pool.get(handle)
    }

    /// Mutably borrows the material properties behind `handle`.
    ///
    /// # Panics
    /// Panics if the handle is invalid.
    #[inline]
    pub fn properties_mut(&mut self, handle: MaterialHandle) -> &mut MaterialProperties {
        self.pool.get_mut(handle)
    }

    /// Number of material slots ever allocated, free ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Whether the registry has never allocated a slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Number of live materials.
    #[inline]
    pub fn live_len(&self) -> usize {
        self.pool.live_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a_plain_dielectric() {
        let m = MaterialProperties::default();
        assert_eq!(m.base_color, LinearRgba::WHITE);
        assert_eq!(m.metallic, 0.0);
        assert_eq!(m.roughness, 0.5);
        assert!(m.base_color_texture.is_none());
    }

    #[test]
    fn create_and_mutate() {
        let mut registry = MaterialRegistry::new();
        let h = registry.create(MaterialProperties {
            base_color: LinearRgba::RED,
            metallic: 1.0,
            ..Default::default()
        });
        assert_eq!(registry.properties(h).base_color, LinearRgba::RED);
        registry.properties_mut(h).roughness = 0.2;
        assert_eq!(registry.try_get(h).unwrap().roughness, 0.2);
    }

    #[test]
    fn released_materials_are_gone() {
        let mut registry = MaterialRegistry::new();
        let h = registry.create(MaterialProperties::default());
        assert!(registry.release(h));
        assert!(!registry.is_valid(h));
        assert_eq!(registry.try_get(h), None);
    }

    #[test]
    fn texture_reference_survives_round_trip() {
        let mut registry = MaterialRegistry::new();
        let tex = TextureHandle::from_index(3);
        let h = registry.create(MaterialProperties {
            base_color_texture: Some(tex),
            ..Default::default()
        });
        assert_eq!(registry.properties(h).base_color_texture, Some(tex));
    }
}
