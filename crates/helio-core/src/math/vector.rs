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

//! 2D, 3D, and 4D vector value types over `f32` and `i32`.
//!
//! These are plain stack aggregates with component-wise arithmetic. Equality
//! is the derived, exact comparison; the scalar `approx_eq` helpers in
//! [`crate::math`] exist for tolerance-based checks, but several call sites
//! (deduplication among them) rely on vectors comparing exactly.

use super::EPSILON;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! vector_struct {
    ($(#[$meta:meta])* $name:ident, $scalar:ty, $($field:ident),+) => {
        $(#[$meta])*
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
        pub struct $name {
            $(
                #[doc = concat!("The ", stringify!($field), " component.")]
                pub $field: $scalar,
            )+
        }

        impl $name {
            /// Creates a new vector with the specified components.
            #[inline]
            pub const fn new($($field: $scalar),+) -> Self {
                Self { $($field),+ }
            }

            /// Creates a vector with every component set to `value`.
            #[inline]
            pub const fn splat(value: $scalar) -> Self {
                Self { $($field: value),+ }
            }

            /// Calculates the dot product of this vector and another.
            #[inline]
            pub fn dot(self, rhs: Self) -> $scalar {
                let mut sum = 0 as $scalar;
                $(sum += self.$field * rhs.$field;)+
                sum
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Mul for $name {
            type Output = Self;
            /// Component-wise product.
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl Div for $name {
            type Output = Self;
            /// Component-wise quotient.
            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl Mul<$scalar> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: $scalar) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl Mul<$name> for $scalar {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl Div<$scalar> for $name {
            type Output = Self;
            #[inline]
            fn div(self, rhs: $scalar) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$field *= rhs.$field;)+
            }
        }

        impl DivAssign for $name {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                $(self.$field /= rhs.$field;)+
            }
        }

        impl MulAssign<$scalar> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $scalar) {
                $(self.$field *= rhs;)+
            }
        }

        impl DivAssign<$scalar> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: $scalar) {
                $(self.$field /= rhs;)+
            }
        }
    };
}

macro_rules! vector_index {
    ($name:ident, $scalar:ty, $($idx:literal => $field:ident),+) => {
        impl Index<usize> for $name {
            type Output = $scalar;
            /// Accesses a component by position (`v[0]`, `v[1]`, ...).
            ///
            /// # Panics
            /// Panics if `index` is out of range.
            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!(concat!("Index out of bounds for ", stringify!($name))),
                }
            }
        }

        impl IndexMut<usize> for $name {
            /// Mutably accesses a component by position (`v[0] = ...`).
            ///
            /// # Panics
            /// Panics if `index` is out of range.
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!(concat!("Index out of bounds for ", stringify!($name))),
                }
            }
        }
    };
}

macro_rules! float_vector_extras {
    ($name:ident, $($field:ident),+) => {
        impl $name {
            /// A vector with all components set to `0.0`.
            pub const ZERO: Self = Self::splat(0.0);
            /// A vector with all components set to `1.0`.
            pub const ONE: Self = Self::splat(1.0);

            /// Calculates the squared length of the vector.
            ///
            /// Cheaper than [`length`](Self::length); prefer it for
            /// comparisons.
            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            /// Calculates the length (magnitude) of the vector.
            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Returns a unit-length copy of the vector, or zero if the
            /// vector's length is itself near zero.
            #[inline]
            pub fn normalize(self) -> Self {
                let len_sq = self.length_squared();
                if len_sq > EPSILON * EPSILON {
                    self * (1.0 / len_sq.sqrt())
                } else {
                    Self::splat(0.0)
                }
            }

            /// Linearly interpolates from `self` towards `end`, with `t`
            /// clamped to `[0.0, 1.0]`.
            #[inline]
            pub fn lerp(self, end: Self, t: f32) -> Self {
                self + (end - self) * t.clamp(0.0, 1.0)
            }
        }
    };
}

macro_rules! int_vector_extras {
    ($name:ident) => {
        impl $name {
            /// A vector with all components set to `0`.
            pub const ZERO: Self = Self::splat(0);
            /// A vector with all components set to `1`.
            pub const ONE: Self = Self::splat(1);
        }
    };
}

vector_struct!(
    /// A 2-dimensional vector with `f32` components.
    Vec2, f32, x, y
);
vector_struct!(
    /// A 3-dimensional vector with `f32` components.
    Vec3, f32, x, y, z
);
vector_struct!(
    /// A 4-dimensional vector with `f32` components.
    Vec4, f32, x, y, z, w
);
vector_struct!(
    /// A 2-dimensional vector with `i32` components.
    IVec2, i32, x, y
);
vector_struct!(
    /// A 3-dimensional vector with `i32` components.
    IVec3, i32, x, y, z
);
vector_struct!(
    /// A 4-dimensional vector with `i32` components.
    IVec4, i32, x, y, z, w
);

vector_index!(Vec2, f32, 0 => x, 1 => y);
vector_index!(Vec3, f32, 0 => x, 1 => y, 2 => z);
vector_index!(Vec4, f32, 0 => x, 1 => y, 2 => z, 3 => w);
vector_index!(IVec2, i32, 0 => x, 1 => y);
vector_index!(IVec3, i32, 0 => x, 1 => y, 2 => z);
vector_index!(IVec4, i32, 0 => x, 1 => y, 2 => z, 3 => w);

float_vector_extras!(Vec2, x, y);
float_vector_extras!(Vec3, x, y, z);
float_vector_extras!(Vec4, x, y, z, w);
int_vector_extras!(IVec2);
int_vector_extras!(IVec3);
int_vector_extras!(IVec4);

impl Vec2 {
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0);
}

impl Vec3 {
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Calculates the cross product of this vector and another.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Extends this vector into a [`Vec4`] with the given `w` component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl Vec4 {
    /// Drops the `w` component, yielding a [`Vec3`].
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn component_wise_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vec2::new(1.0, 2.0);
        v += Vec2::new(0.5, 0.5);
        assert_eq!(v, Vec2::new(1.5, 2.5));
        v *= 2.0;
        assert_eq!(v, Vec2::new(3.0, 5.0));
        v -= Vec2::ONE;
        assert_eq!(v, Vec2::new(2.0, 4.0));
        v /= 2.0;
        assert_eq!(v, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn equality_is_exact() {
        // 0.1 + 0.2 != 0.3 in f32 arithmetic; the vector must agree with
        // the scalars, not paper over them with a tolerance.
        let sum = Vec2::new(0.1, 0.0) + Vec2::new(0.2, 0.0);
        assert_ne!(sum, Vec2::new(0.3, 0.0));
        assert_eq!(Vec2::new(0.5, 0.25), Vec2::new(0.5, 0.25));
    }

    #[test]
    fn dot_and_length() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.dot(v), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn normalize_of_near_zero_is_zero() {
        assert_eq!(Vec3::splat(1e-8).normalize(), Vec3::ZERO);
    }

    #[test]
    fn cross_follows_the_right_hand_rule() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 10.0);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, 5.0));
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn integer_vectors_share_the_arithmetic() {
        let a = IVec3::new(1, 2, 3);
        let b = IVec3::new(3, 2, 1);
        assert_eq!(a + b, IVec3::splat(4));
        assert_eq!(a.dot(b), 10);
        assert_eq!(a * 3, IVec3::new(3, 6, 9));
    }

    #[test]
    fn components_index_by_position() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 9.0;
        assert_eq!(v, Vec3::new(1.0, 9.0, 3.0));

        let i = IVec4::new(1, 2, 3, 4);
        assert_eq!(i[3], 4);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn indexing_past_the_last_component_panics() {
        let v = Vec2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn array_conversions() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let a: [f32; 4] = v.into();
        assert_eq!(Vec4::from(a), v);
    }
}
