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

//! Foundational math primitives: vectors, matrices, quaternions, colors.
//!
//! These are the transient value types of the engine: plain stack
//! aggregates passed into and out of the registry façades, and the operand
//! types for all arithmetic. None of them knows anything about pools or
//! handles.
//!
//! Struct equality is always the derived, **exact** comparison. The
//! epsilon-tolerant helpers below apply to scalars only.
//!
//! Angular functions operate in **radians** unless the name says otherwise.

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

pub mod color;
pub mod matrix;
pub mod quaternion;
pub mod vector;

pub use self::color::LinearRgba;
pub use self::matrix::{Mat2, Mat4};
pub use self::quaternion::Quaternion;
pub use self::vector::{IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};

/// Converts an angle from degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Performs an approximate scalar equality comparison with a custom
/// tolerance.
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate scalar equality comparison using the module's
/// default [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

/// Whether a scalar is within [`EPSILON`] of zero.
#[inline]
pub fn approx_zero(value: f32) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_conversions_round_trip() {
        assert_eq!(degrees_to_radians(180.0), PI);
        assert_eq!(radians_to_degrees(PI), 180.0);
    }

    #[test]
    fn scalar_approx_helpers() {
        assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
        assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
        assert!(approx_zero(-EPSILON / 2.0));
    }
}
