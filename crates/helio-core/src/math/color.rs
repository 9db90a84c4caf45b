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

//! The `LinearRgba` color type used by material properties.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// A color in **linear RGBA** space with `f32` components.
///
/// Linear space is what lighting and blending math expects; convert from
/// sRGB inputs with [`from_srgb`](Self::from_srgb). Components may exceed
/// `1.0` for HDR values. `#[repr(C)]` keeps the layout stable for GPU
/// upload.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

impl LinearRgba {
    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Fully transparent black (`[0.0, 0.0, 0.0, 0.0]`).
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque red (`[1.0, 0.0, 0.0, 1.0]`).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green (`[0.0, 1.0, 0.0, 1.0]`).
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue (`[0.0, 0.0, 1.0, 1.0]`).
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Creates a color with explicit RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Converts non-linear sRGB components into linear space. Alpha is
    /// passed through unchanged.
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        #[inline]
        fn channel(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self::new(channel(r), channel(g), channel(b), a)
    }

    /// Returns the components as an array `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Add for LinearRgba {
    type Output = Self;
    /// Component-wise sum, as used when accumulating light contributions.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Mul<f32> for LinearRgba {
    type Output = Self;
    /// Scales every component, alpha included.
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Mul for LinearRgba {
    type Output = Self;
    /// Component-wise (modulation) product.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn srgb_conversion_matches_reference_points() {
        // sRGB 0.5 is ~0.2140 linear.
        let c = LinearRgba::from_srgb(0.5, 0.0, 1.0, 0.75);
        assert_relative_eq!(c.r, 0.2140, epsilon = 1e-3);
        assert_eq!(c.g, 0.0);
        assert_relative_eq!(c.b, 1.0, epsilon = 1e-6);
        assert_eq!(c.a, 0.75);
    }

    #[test]
    fn modulation_tints_white() {
        let tint = LinearRgba::rgb(1.0, 0.5, 0.25);
        assert_eq!(LinearRgba::WHITE * tint, tint);
    }
}
