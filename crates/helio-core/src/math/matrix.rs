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

//! Column-major 2x2 and 4x4 matrix value types.

use super::quaternion::Quaternion;
use super::vector::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

// --- Mat2 ---

/// A 2x2 column-major matrix with `f32` components.
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
pub struct Mat2 {
    /// The first column.
    pub x_axis: Vec2,
    /// The second column.
    pub y_axis: Vec2,
}

impl Mat2 {
    /// The 2x2 identity matrix.
    pub const IDENTITY: Self = Self {
        x_axis: Vec2::X,
        y_axis: Vec2::Y,
    };
    /// The 2x2 zero matrix.
    pub const ZERO: Self = Self {
        x_axis: Vec2::ZERO,
        y_axis: Vec2::ZERO,
    };

    /// Creates a matrix from two column vectors.
    #[inline]
    pub const fn from_cols(x_axis: Vec2, y_axis: Vec2) -> Self {
        Self { x_axis, y_axis }
    }

    /// Creates a matrix from a column-major cell array
    /// `[m00, m01, m10, m11]`.
    #[inline]
    pub const fn from_cols_array(cells: [f32; 4]) -> Self {
        Self {
            x_axis: Vec2::new(cells[0], cells[1]),
            y_axis: Vec2::new(cells[2], cells[3]),
        }
    }

    /// Returns the cells of the matrix in column-major order.
    #[inline]
    pub const fn to_cols_array(self) -> [f32; 4] {
        [self.x_axis.x, self.x_axis.y, self.y_axis.x, self.y_axis.y]
    }

    /// Creates a rotation matrix for `angle` radians (counter-clockwise).
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cols(Vec2::new(cos, sin), Vec2::new(-sin, cos))
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub const fn transpose(self) -> Self {
        Self {
            x_axis: Vec2::new(self.x_axis.x, self.y_axis.x),
            y_axis: Vec2::new(self.x_axis.y, self.y_axis.y),
        }
    }

    /// Calculates the determinant of the matrix.
    #[inline]
    pub fn determinant(self) -> f32 {
        self.x_axis.x * self.y_axis.y - self.x_axis.y * self.y_axis.x
    }
}

impl Mul for Mat2 {
    type Output = Self;
    /// Standard matrix multiplication.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            x_axis: self * rhs.x_axis,
            y_axis: self * rhs.y_axis,
        }
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;
    /// Transforms a column vector.
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.x_axis * rhs.x + self.y_axis * rhs.y
    }
}

impl Mul<f32> for Mat2 {
    type Output = Self;
    /// Multiplies every cell by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self {
            x_axis: self.x_axis * rhs,
            y_axis: self.y_axis * rhs,
        }
    }
}

impl Add for Mat2 {
    type Output = Self;
    /// Cell-wise sum.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x_axis: self.x_axis + rhs.x_axis,
            y_axis: self.y_axis + rhs.y_axis,
        }
    }
}

impl Sub for Mat2 {
    type Output = Self;
    /// Cell-wise difference.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x_axis: self.x_axis - rhs.x_axis,
            y_axis: self.y_axis - rhs.y_axis,
        }
    }
}

// --- Mat4 ---

/// A 4x4 column-major matrix with `f32` components.
///
/// The usual transform layout applies: the translation lives in
/// `w_axis.xyz` and the basis vectors in the first three columns.
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
pub struct Mat4 {
    /// The first column.
    pub x_axis: Vec4,
    /// The second column.
    pub y_axis: Vec4,
    /// The third column.
    pub z_axis: Vec4,
    /// The fourth column.
    pub w_axis: Vec4,
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        x_axis: Vec4::new(1.0, 0.0, 0.0, 0.0),
        y_axis: Vec4::new(0.0, 1.0, 0.0, 0.0),
        z_axis: Vec4::new(0.0, 0.0, 1.0, 0.0),
        w_axis: Vec4::new(0.0, 0.0, 0.0, 1.0),
    };
    /// The 4x4 zero matrix.
    pub const ZERO: Self = Self {
        x_axis: Vec4::ZERO,
        y_axis: Vec4::ZERO,
        z_axis: Vec4::ZERO,
        w_axis: Vec4::ZERO,
    };

    /// Creates a matrix from four column vectors.
    #[inline]
    pub const fn from_cols(x_axis: Vec4, y_axis: Vec4, z_axis: Vec4, w_axis: Vec4) -> Self {
        Self {
            x_axis,
            y_axis,
            z_axis,
            w_axis,
        }
    }

    /// Creates a matrix from a column-major cell array.
    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self {
            x_axis: Vec4::new(m[0], m[1], m[2], m[3]),
            y_axis: Vec4::new(m[4], m[5], m[6], m[7]),
            z_axis: Vec4::new(m[8], m[9], m[10], m[11]),
            w_axis: Vec4::new(m[12], m[13], m[14], m[15]),
        }
    }

    /// Returns the cells of the matrix in column-major order.
    #[inline]
    pub const fn to_cols_array(self) -> [f32; 16] {
        [
            self.x_axis.x,
            self.x_axis.y,
            self.x_axis.z,
            self.x_axis.w,
            self.y_axis.x,
            self.y_axis.y,
            self.y_axis.z,
            self.y_axis.w,
            self.z_axis.x,
            self.z_axis.y,
            self.z_axis.z,
            self.z_axis.w,
            self.w_axis.x,
            self.w_axis.y,
            self.w_axis.z,
            self.w_axis.w,
        ]
    }

    /// Creates a translation matrix.
    #[inline]
    pub const fn from_translation(translation: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.w_axis = Vec4::new(translation.x, translation.y, translation.z, 1.0);
        m
    }

    /// Creates a non-uniform scale matrix.
    #[inline]
    pub const fn from_scale(scale: Vec3) -> Self {
        Self {
            x_axis: Vec4::new(scale.x, 0.0, 0.0, 0.0),
            y_axis: Vec4::new(0.0, scale.y, 0.0, 0.0),
            z_axis: Vec4::new(0.0, 0.0, scale.z, 0.0),
            w_axis: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Creates a rotation matrix from a (unit) quaternion.
    pub fn from_quaternion(q: Quaternion) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;
        let xx = q.x * x2;
        let xy = q.x * y2;
        let xz = q.x * z2;
        let yy = q.y * y2;
        let yz = q.y * z2;
        let zz = q.z * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        Self {
            x_axis: Vec4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            y_axis: Vec4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            z_axis: Vec4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            w_axis: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Returns the transpose of the matrix.
    pub const fn transpose(self) -> Self {
        Self {
            x_axis: Vec4::new(self.x_axis.x, self.y_axis.x, self.z_axis.x, self.w_axis.x),
            y_axis: Vec4::new(self.x_axis.y, self.y_axis.y, self.z_axis.y, self.w_axis.y),
            z_axis: Vec4::new(self.x_axis.z, self.y_axis.z, self.z_axis.z, self.w_axis.z),
            w_axis: Vec4::new(self.x_axis.w, self.y_axis.w, self.z_axis.w, self.w_axis.w),
        }
    }

    /// Calculates the determinant of the matrix.
    pub fn determinant(self) -> f32 {
        let c0 = self.x_axis;
        let c1 = self.y_axis;
        let c2 = self.z_axis;
        let c3 = self.w_axis;

        // Cofactor expansion along the first row.
        let m00 = c1.y * (c2.z * c3.w - c3.z * c2.w) - c2.y * (c1.z * c3.w - c3.z * c1.w)
            + c3.y * (c1.z * c2.w - c2.z * c1.w);
        let m01 = c0.y * (c2.z * c3.w - c3.z * c2.w) - c2.y * (c0.z * c3.w - c3.z * c0.w)
            + c3.y * (c0.z * c2.w - c2.z * c0.w);
        let m02 = c0.y * (c1.z * c3.w - c3.z * c1.w) - c1.y * (c0.z * c3.w - c3.z * c0.w)
            + c3.y * (c0.z * c1.w - c1.z * c0.w);
        let m03 = c0.y * (c1.z * c2.w - c2.z * c1.w) - c1.y * (c0.z * c2.w - c2.z * c0.w)
            + c2.y * (c0.z * c1.w - c1.z * c0.w);

        c0.x * m00 - c1.x * m01 + c2.x * m02 - c3.x * m03
    }

    /// Transforms a point, applying rotation, scale, and translation
    /// (assumes `w = 1`).
    #[inline]
    pub fn transform_point(self, point: Vec3) -> Vec3 {
        (self * point.extend(1.0)).truncate()
    }

    /// Transforms a direction, ignoring translation (assumes `w = 0`).
    #[inline]
    pub fn transform_vector(self, vector: Vec3) -> Vec3 {
        (self * vector.extend(0.0)).truncate()
    }
}

impl Mul for Mat4 {
    type Output = Self;
    /// Standard matrix multiplication.
    fn mul(self, rhs: Self) -> Self {
        Self {
            x_axis: self * rhs.x_axis,
            y_axis: self * rhs.y_axis,
            z_axis: self * rhs.z_axis,
            w_axis: self * rhs.w_axis,
        }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a column vector.
    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.x_axis * rhs.x + self.y_axis * rhs.y + self.z_axis * rhs.z + self.w_axis * rhs.w
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    /// Multiplies every cell by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self {
            x_axis: self.x_axis * rhs,
            y_axis: self.y_axis * rhs,
            z_axis: self.z_axis * rhs,
            w_axis: self.w_axis * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FRAC_PI_2;
    use approx::assert_relative_eq;

    #[test]
    fn mat2_identity_is_neutral() {
        let m = Mat2::from_cols(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(Mat2::IDENTITY * m, m);
        assert_eq!(m * Mat2::IDENTITY, m);
    }

    #[test]
    fn mat2_cells_round_trip_column_major() {
        let cells = [1.0, 2.0, 3.0, 4.0];
        let m = Mat2::from_cols_array(cells);
        assert_eq!(m.x_axis, Vec2::new(1.0, 2.0));
        assert_eq!(m.to_cols_array(), cells);
    }

    #[test]
    fn mat2_rotation_quarter_turn() {
        let m = Mat2::from_angle(FRAC_PI_2);
        let v = m * Vec2::X;
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn mat2_transpose_swaps_off_diagonal() {
        let m = Mat2::from_cols_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.transpose().to_cols_array(), [1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn mat4_translation_moves_points_not_vectors() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_vector(Vec3::X), Vec3::X);
    }

    #[test]
    fn mat4_scale_then_translate_composes() {
        let t = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let s = Mat4::from_scale(Vec3::splat(2.0));
        let m = t * s;
        assert_eq!(m.transform_point(Vec3::ONE), Vec3::new(12.0, 2.0, 2.0));
    }

    #[test]
    fn mat4_cells_round_trip_column_major() {
        let m = Mat4::from_translation(Vec3::new(7.0, 8.0, 9.0));
        let cells = m.to_cols_array();
        assert_eq!(cells[12], 7.0);
        assert_eq!(cells[13], 8.0);
        assert_eq!(cells[14], 9.0);
        assert_eq!(Mat4::from_cols_array(cells), m);
    }

    #[test]
    fn mat4_from_quaternion_matches_direct_rotation() {
        let q = Quaternion::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let m = Mat4::from_quaternion(q);
        let rotated = m.transform_point(Vec3::X);
        let direct = q.rotate(Vec3::X);
        assert_relative_eq!(rotated.x, direct.x, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, direct.y, epsilon = 1e-6);
        assert_relative_eq!(rotated.z, direct.z, epsilon = 1e-6);
    }

    #[test]
    fn mat4_determinant_of_scale_is_the_product_of_scales() {
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0)).determinant(), 24.0);
        // Translation does not change volume.
        assert_eq!(Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0)).determinant(), 1.0);
        assert_eq!(Mat4::ZERO.determinant(), 0.0);
    }

    #[test]
    fn mat4_rotation_determinant_is_one() {
        let m = Mat4::from_quaternion(Quaternion::from_axis_angle(Vec3::Y, 0.7));
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn mat4_transpose_is_involutive() {
        let m = Mat4::from_quaternion(Quaternion::from_axis_angle(Vec3::Y, 0.7));
        assert_eq!(m.transpose().transpose(), m);
    }
}
