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

//! Registry façades for GPU-adjacent resources.
//!
//! Textures and materials follow the same pool-backed contract as the math
//! registries, with one addition: [`TextureRegistry::load_from_file`]
//! layers file decoding on top of `create`. Decoding either succeeds and
//! registers a handle, or fails without touching the registry — there is no
//! half-registered state.

mod error;
mod material;
mod texture;

pub use error::TextureError;
pub use material::{MaterialHandle, MaterialProperties, MaterialRegistry};
pub use texture::{ColorSpace, TextureHandle, TextureProperties, TextureRegistry};
