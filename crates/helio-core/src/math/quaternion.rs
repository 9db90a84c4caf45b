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

//! A quaternion type for representing 3D rotations.

use super::vector::Vec3;
use super::EPSILON;
use serde::{Deserialize, Serialize};
use std::ops::{Mul, Neg};

/// A quaternion `x*i + y*j + z*k + w` with `f32` components.
///
/// Rotation helpers assume a unit quaternion; re-normalize after chains of
/// multiplications if drift matters. Equality is exact, like every other
/// math value type in this crate.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Quaternion {
    /// The first imaginary component.
    pub x: f32,
    /// The second imaginary component.
    pub y: f32,
    /// The third imaginary component.
    pub z: f32,
    /// The real component.
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a rotation of `angle` radians around `axis`.
    ///
    /// The axis is normalized internally; a near-zero axis yields the
    /// identity rotation.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = axis.normalize();
        if axis == Vec3::ZERO {
            return Self::IDENTITY;
        }
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self {
            x: axis.x * sin,
            y: axis.y * sin,
            z: axis.z * sin,
            w: cos,
        }
    }

    /// Calculates the dot product of this quaternion and another.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Calculates the squared length of the quaternion.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Calculates the length of the quaternion.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a unit-length copy, or the identity if the length is near
    /// zero.
    pub fn normalize(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > EPSILON * EPSILON {
            let inv = 1.0 / len_sq.sqrt();
            Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
        } else {
            Self::IDENTITY
        }
    }

    /// Returns the conjugate. For a unit quaternion this is the inverse
    /// rotation.
    #[inline]
    pub const fn conjugate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Rotates a vector by this (unit) quaternion.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        // v' = v + 2w(u x v) + 2(u x (u x v)), u = imaginary part
        let u = Vec3::new(self.x, self.y, self.z);
        let uv = u.cross(v);
        v + (uv * self.w + u.cross(uv)) * 2.0
    }

    /// Linearly interpolates towards `end` and normalizes the result.
    ///
    /// Good enough for small angular differences; use [`slerp`](Self::slerp)
    /// when constant angular velocity matters.
    pub fn nlerp(self, end: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        // Interpolate along the shorter arc.
        let end = if self.dot(end) < 0.0 { -end } else { end };
        Self::new(
            self.x + (end.x - self.x) * t,
            self.y + (end.y - self.y) * t,
            self.z + (end.z - self.z) * t,
            self.w + (end.w - self.w) * t,
        )
        .normalize()
    }

    /// Spherically interpolates towards `end`.
    pub fn slerp(self, end: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mut cos_theta = self.dot(end);
        let end = if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            -end
        } else {
            end
        };

        // Fall back to nlerp when the quaternions are nearly parallel and
        // sin(theta) loses precision.
        if cos_theta > 1.0 - EPSILON {
            return self.nlerp(end, t);
        }

        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let a = ((1.0 - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        Self::new(
            self.x * a + end.x * b,
            self.y * a + end.y * b,
            self.z * a + end.z * b,
            self.w * a + end.w * b,
        )
    }
}

impl Mul for Quaternion {
    type Output = Self;
    /// Hamilton product; `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: Self) -> Self {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates every component. Represents the same rotation.
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{FRAC_PI_2, PI};
    use approx::assert_relative_eq;

    fn assert_vec3_close(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-6);
    }

    #[test]
    fn identity_leaves_vectors_alone() {
        assert_eq!(Quaternion::IDENTITY.rotate(Vec3::X), Vec3::X);
    }

    #[test]
    fn quarter_turn_around_z() {
        let q = Quaternion::from_axis_angle(Vec3::Z, FRAC_PI_2);
        assert_vec3_close(q.rotate(Vec3::X), Vec3::Y);
    }

    #[test]
    fn conjugate_undoes_the_rotation() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.9);
        let v = Vec3::new(4.0, -5.0, 6.0);
        assert_vec3_close(q.conjugate().rotate(q.rotate(v)), v);
    }

    #[test]
    fn composition_applies_right_hand_side_first() {
        let yaw = Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let roll = Quaternion::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let combined = yaw * roll;
        assert_vec3_close(combined.rotate(Vec3::X), yaw.rotate(roll.rotate(Vec3::X)));
    }

    #[test]
    fn zero_axis_yields_identity() {
        assert_eq!(Quaternion::from_axis_angle(Vec3::ZERO, 1.0), Quaternion::IDENTITY);
    }

    #[test]
    fn slerp_endpoints_and_midpoint() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vec3::Y, PI * 0.5);
        assert_eq!(a.slerp(b, 0.0), a);
        let mid = a.slerp(b, 0.5);
        let expected = Quaternion::from_axis_angle(Vec3::Y, PI * 0.25);
        assert_relative_eq!(mid.dot(expected).abs(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn normalize_restores_unit_length() {
        let q = Quaternion::new(2.0, 0.0, 0.0, 2.0);
        assert_relative_eq!(q.normalize().length(), 1.0, epsilon = 1e-6);
    }
}
