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

//! End-to-end exercise of the registry context: math façades, resource
//! façades, and handle lifecycles working together.

use helio_core::math::{LinearRgba, Mat4, Quaternion, Vec2, Vec3, FRAC_PI_2};
use helio_core::resource::{ColorSpace, MaterialProperties, TextureProperties};
use helio_core::{PoolConfig, Registry};

#[test]
fn float2_lifecycle_with_reuse() {
    let mut registry = Registry::new();

    let h0 = registry.vec2.create(3.0, 4.0);
    let stored = registry.vec2.try_get(h0).expect("fresh handle must be live");
    assert_eq!(stored, Vec2::new(3.0, 4.0));
    assert_eq!(stored.length(), 5.0);

    assert!(registry.vec2.release(h0));
    let h1 = registry.vec2.create(1.0, 1.0);
    assert_eq!(h1, h0, "lowest free slot must be recycled");
    assert_eq!(registry.vec2.try_get(h0), Some(Vec2::new(1.0, 1.0)));
}

#[test]
fn transform_stack_through_the_registry() {
    let mut registry = Registry::new();

    let rotation = registry
        .quaternion
        .create_from(Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2));
    let transform = registry.mat4.create(Mat4::from_translation(Vec3::X));

    let q = registry.quaternion.try_get(rotation).unwrap();
    let m = registry.mat4.try_get(transform).unwrap();
    let moved = m.transform_point(q.rotate(Vec3::Z));
    // Rotating +Z a quarter turn around +Y lands on +X, then translate.
    assert!((moved.x - 2.0).abs() < 1e-6);
    assert!(moved.y.abs() < 1e-6);
    assert!(moved.z.abs() < 1e-6);
}

#[test]
fn material_references_texture_across_registries() {
    let mut registry = Registry::new();

    let texture = registry.textures.create(TextureProperties {
        width: 1,
        height: 1,
        channels: 4,
        pixels: vec![255, 255, 255, 255],
        color_space: ColorSpace::Srgb,
    });
    let material = registry.materials.create(MaterialProperties {
        base_color: LinearRgba::rgb(0.8, 0.1, 0.1),
        base_color_texture: Some(texture),
        ..Default::default()
    });

    let props = registry.materials.properties(material);
    let referenced = props.base_color_texture.expect("texture reference set");
    assert!(registry.textures.is_valid(referenced));
    assert_eq!(registry.textures.properties(referenced).width, 1);

    // Releasing the texture leaves the material intact but the reference
    // dangling, and the texture registry reports it dead.
    assert!(registry.textures.release(texture));
    assert!(registry.materials.is_valid(material));
    assert!(!registry.textures.is_valid(referenced));
}

#[test]
fn growth_under_a_tight_config_preserves_everything() {
    let mut registry = Registry::with_config(PoolConfig {
        initial_capacity: 1,
        expansion_scalar: 0.5,
    });

    let handles: Vec<_> = (0..100)
        .map(|i| registry.vec3.create(i as f32, 0.0, -(i as f32)))
        .collect();
    for (i, h) in handles.iter().enumerate() {
        assert_eq!(
            registry.vec3.try_get(*h),
            Some(Vec3::new(i as f32, 0.0, -(i as f32)))
        );
    }
}

#[test]
fn append_only_handles_stay_monotonic() {
    let mut registry = Registry::new();
    let a = registry.ivec3.create(1, 2, 3);
    let b = registry.ivec3.create(4, 5, 6);
    registry.ivec3.release(a);

    // With reuse disabled the freed slot must not come back.
    let c = registry.ivec3.push(helio_core::math::IVec3::ONE, false);
    assert!(c > b);
    assert_eq!(c.index(), 2);
}
