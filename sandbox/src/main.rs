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

// Helio Sandbox
// Small demo binary exercising the foundation layer end to end.

use anyhow::{Context, Result};
use helio_core::event::EventBus;
use helio_core::math::{LinearRgba, Mat4, Quaternion, Vec3, FRAC_PI_2};
use helio_core::platform::WindowEvent;
use helio_core::resource::{ColorSpace, MaterialProperties, TextureProperties};
use helio_core::{PoolConfig, Registry};

fn load_pool_config() -> Result<PoolConfig> {
    // An optional JSON config path may be passed as the first argument.
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading pool config '{path}'"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing pool config '{path}'"))
        }
        None => Ok(PoolConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_pool_config()?;
    let mut registry = Registry::with_config(config);

    // A tiny "scene": one entity position, one orientation, one transform.
    let position = registry.vec3.create_from(Vec3::new(0.0, 1.0, -5.0));
    let orientation = registry
        .quaternion
        .create_from(Quaternion::from_axis_angle(Vec3::Y, FRAC_PI_2));
    let transform = registry.mat4.create(Mat4::from_translation(
        registry.vec3.try_get(position).expect("position is live"),
    ));

    log::info!(
        "spawned entity at {:?} with orientation {:?}",
        registry.vec3.try_get(position),
        registry.quaternion.try_get(orientation)
    );

    // Nudge the entity through the component accessors.
    *registry.vec3.y(position) += 0.5;
    *registry.mat4.cell(transform, 3, 1) += 0.5;
    log::info!("entity nudged up to y = {}", registry.vec3.const_y(position));

    // A 2x2 white texture and a material referencing it.
    let texture = registry.textures.create(TextureProperties {
        width: 2,
        height: 2,
        channels: 4,
        pixels: vec![255; 16],
        color_space: ColorSpace::Srgb,
    });
    let material = registry.materials.create(MaterialProperties {
        base_color: LinearRgba::rgb(0.9, 0.6, 0.1),
        base_color_texture: Some(texture),
        roughness: 0.35,
        ..Default::default()
    });
    log::info!(
        "material {material:?} references texture {texture:?} ({} live textures)",
        registry.textures.live_len()
    );

    // Handle churn: release and respawn, observing deterministic reuse.
    registry.vec3.release(position);
    let respawned = registry.vec3.create(0.0, 0.0, 0.0);
    log::info!("respawned entity reused handle: {}", respawned == position);

    // Window events travel over the broadcast bus.
    let mut bus = EventBus::new();
    let events = bus.subscribe();
    bus.publish(WindowEvent::Resized {
        width: 1280,
        height: 720,
    });
    bus.publish(WindowEvent::CloseRequested);
    while let Ok(event) = events.try_recv() {
        log::info!("window event: {event:?}");
        if event == WindowEvent::CloseRequested {
            break;
        }
    }

    registry.materials.release(material);
    registry.textures.release(texture);
    registry.mat4.release(transform);
    registry.quaternion.release(orientation);
    registry.vec3.release(respawned);
    log::info!("scene torn down cleanly");
    Ok(())
}
