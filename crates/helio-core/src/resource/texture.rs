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

//! CPU-side texture storage behind pool handles.

use super::error::TextureError;
use crate::pool::{Handle, MemoryBlock, PoolConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Handle to a pooled [`TextureProperties`].
pub type TextureHandle = Handle<TextureProperties>;

/// The color space the pixel data of a texture is encoded in.
///
/// Color textures from disk are almost always sRGB; data textures (normal
/// maps, masks) are linear. The renderer needs to know which, so the flag
/// travels with the pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpace {
    /// Values are linear; sample them as-is.
    #[default]
    Linear,
    /// Values are sRGB-encoded; convert to linear when sampling.
    Srgb,
}

/// A CPU-side representation of a decoded texture, ready for GPU upload.
///
/// This is the value stored in the texture pool. The actual GPU resource
/// creation is a renderer concern and out of scope here.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextureProperties {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Number of channels per pixel (4 for RGBA).
    pub channels: u32,
    /// The raw pixel data, `width * height * channels` bytes, row-major.
    pub pixels: Vec<u8>,
    /// The color space of `pixels`.
    pub color_space: ColorSpace,
}

impl TextureProperties {
    /// Size of one row of pixels in bytes, relevant for upload alignment.
    #[inline]
    pub fn row_size(&self) -> usize {
        self.width as usize * self.channels as usize
    }
}

/// Pooled storage for [`TextureProperties`].
///
/// Same contract as the math registries: `create`/`release`/`is_valid`/
/// `try_get`, plus reference accessors because texture properties are too
/// heavy to copy casually.
#[derive(Debug, Clone, Default)]
pub struct TextureRegistry {
    pool: MemoryBlock<TextureProperties>,
}

impl TextureRegistry {
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

    /// Registers a texture, recycling freed slots.
    pub fn create(&mut self, properties: TextureProperties) -> TextureHandle {
        self.push(properties, true)
    }

    /// Registers a texture with explicit control over slot reuse.
    pub fn push(&mut self, properties: TextureProperties, reuse_free_slots: bool) -> TextureHandle {
        log::debug!(
            "registering {}x{} texture ({} channels)",
            properties.width,
            properties.height,
            properties.channels
        );
        self.pool.push(properties, reuse_free_slots)
    }

    /// Decodes an image file and registers it as a texture.
    ///
    /// Pixels are expanded to 8-bit RGBA regardless of the on-disk format.
    /// On failure no handle is registered and the registry is unchanged.
    pub fn load_from_file(
        &mut self,
        path: impl AsRef<Path>,
        color_space: ColorSpace,
    ) -> Result<TextureHandle, TextureError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(io) => TextureError::Io {
                path: path.display().to_string(),
                source_error: io.to_string(),
            },
            image::ImageError::Unsupported(unsupported) => TextureError::UnsupportedFormat {
                path: path.display().to_string(),
                format: unsupported.format_hint().to_string(),
            },
            other => TextureError::Decode {
                path: path.display().to_string(),
                details: other.to_string(),
            },
        })?;

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("loaded texture '{}' ({width}x{height})", path.display());
        Ok(self.create(TextureProperties {
            width,
            height,
            channels: 4,
            pixels: rgba.into_raw(),
            color_space,
        }))
    }

    /// Releases the texture behind `handle`. Returns `false` if the handle
    /// was not live.
    pub fn release(&mut self, handle: TextureHandle) -> bool {
        self.pool.remove(handle)
    }

    /// Whether `handle` currently names a live texture.
    #[inline]
    pub fn is_valid(&self, handle: TextureHandle) -> bool {
        self.pool.is_valid(handle)
    }

    /// Copies the texture properties out of the registry, if live.
    ///
    /// This clones the pixel data; prefer [`properties`](Self::properties)
    /// when a borrow will do.
    pub fn try_get(&self, handle: TextureHandle) -> Option<TextureProperties> {
        self.pool.try_get(handle)
    }

    /// Borrows the texture properties behind `handle`.
    ///
    /// # Panics
    /// Panics if the handle is invalid.
    #[inline]
    pub fn properties(&self, handle: TextureHandle) -> &TextureProperties {
        self.pool.get(handle)
    }

    /// Mutably borrows the texture properties behind `handle`.
    ///
    /// # Panics
    /// Panics if the handle is invalid.
    #[inline]
    pub fn properties_mut(&mut self, handle: TextureHandle) -> &mut TextureProperties {
        self.pool.get_mut(handle)
    }

    /// Number of texture slots ever allocated, free ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Whether the registry has never allocated a slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Number of live textures.
    #[inline]
    pub fn live_len(&self) -> usize {
        self.pool.live_len()
    }
}
